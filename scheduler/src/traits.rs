//! Trait definitions with mockall annotations for testing
//!
//! Storage is abstracted at two levels: `PersistenceGateway` loads and saves
//! the two tables, `ObjectStore` moves the raw workbook bytes. Both have
//! generated mocks for dependency injection in tests.

use crate::core::{HistoryLedger, Roster};
use crate::error::SchedulerResult;

/// Persistence abstraction for the roster and session history
///
/// Both tables are always read and written together as one unit.
#[mockall::automock]
#[async_trait::async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Load the roster and the full history ledger
    ///
    /// # Returns
    /// The two tables, or empty tables when nothing has been stored yet
    /// (unless the gateway is configured to treat that as an error)
    async fn load(&self) -> SchedulerResult<(Roster, HistoryLedger)>;

    /// Overwrite the stored tables with the given roster and ledger
    ///
    /// # Parameters
    /// - `roster`: complete participants table
    /// - `ledger`: complete session history, in storage order
    async fn save(&self, roster: &Roster, ledger: &HistoryLedger) -> SchedulerResult<()>;

    /// Human readable location for logs
    fn describe(&self) -> String;
}

/// Raw byte storage for a single document
#[mockall::automock]
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the whole document
    ///
    /// Fails with `SchedulerError::MissingStore` when the document does
    /// not exist.
    async fn read(&self) -> SchedulerResult<Vec<u8>>;

    /// Replace the whole document
    async fn write(&self, bytes: Vec<u8>) -> SchedulerResult<()>;

    /// Where the document lives
    fn location(&self) -> String;
}
