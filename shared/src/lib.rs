//! Shared types for the office hours rotation system
//!
//! Contains the records that cross crate boundaries (participants and
//! session records), component identifiers used for log tagging, and the
//! shared error type. Scheduling rules live in the `scheduler` crate.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
