//! Core business logic modules
//!
//! Pure functions and value types with no I/O. Randomness is passed in by
//! the caller.

pub mod calendar;
pub mod ledger;
pub mod roster;
pub mod rotation;

pub use calendar::{next_meeting_date, Cadence};
pub use ledger::HistoryLedger;
pub use roster::Roster;
pub use rotation::{eligible_candidates, recently_used, select_next_pair, DEFAULT_RECENCY_WINDOW};
