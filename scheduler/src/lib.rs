//! Office hours rotation core
//!
//! Picks two participants per biweekly meeting from a roster, keeps the
//! assignment history, and persists both tables through a pluggable
//! gateway (local workbook file or remote blob).

pub mod core;
pub mod error;
pub mod office_hours;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use core::{
    next_meeting_date, select_next_pair, Cadence, HistoryLedger, Roster, DEFAULT_RECENCY_WINDOW,
};
pub use error::{SchedulerError, SchedulerResult};
pub use office_hours::{Assignment, AssignmentRequest, OfficeHours};
pub use services::{BlobStore, LocalFileStore, MissingStorePolicy, WorkbookGateway};
pub use traits::{ObjectStore, PersistenceGateway};
pub use traits::{MockObjectStore, MockPersistenceGateway};
