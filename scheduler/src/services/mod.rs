//! Service implementations
//!
//! Real implementations of the storage traits: the workbook codec, the
//! gateway built on it, and the two object stores.

pub mod blob_store;
pub mod gateway;
pub mod local_store;
pub mod workbook;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use blob_store::BlobStore;
pub use gateway::{MissingStorePolicy, WorkbookGateway};
pub use local_store::LocalFileStore;
