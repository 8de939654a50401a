//! Storage abstraction for registry metadata

use async_trait::async_trait;

use crate::entities::{PackageId, PackageRecord};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Keyed metadata store for package records.
///
/// Each get/put of a single record is atomic; the engine serializes
/// read-modify-write cycles per key, so backends only need record-level
/// atomicity.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetch the record for a package key, if the package exists
    async fn get(&self, id: &PackageId) -> Result<Option<PackageRecord>, StorageError>;

    /// Insert or replace the record for a package key
    async fn put(&self, record: &PackageRecord) -> Result<(), StorageError>;

    /// Check whether a package key exists
    async fn exists(&self, id: &PackageId) -> Result<bool, StorageError>;
}
