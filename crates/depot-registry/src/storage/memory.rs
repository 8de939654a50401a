//! In-memory metadata store for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::entities::{PackageId, PackageRecord};
use crate::storage::{MetadataStore, StorageError};

/// In-memory store implementation backed by a mutex-guarded map
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<PackageId, PackageRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Get all stored package keys (useful for testing)
    pub fn keys(&self) -> Vec<PackageId> {
        self.records.lock().unwrap().keys().cloned().collect()
    }

    /// Clear all records (useful for testing)
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    /// Number of stored packages
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn get(&self, id: &PackageId) -> Result<Option<PackageRecord>, StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StorageError::Backend("Lock poisoned".into()))?;

        Ok(records.get(id).cloned())
    }

    async fn put(&self, record: &PackageRecord) -> Result<(), StorageError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StorageError::Backend("Lock poisoned".into()))?;

        records.insert(record.package.id.clone(), record.clone());
        Ok(())
    }

    async fn exists(&self, id: &PackageId) -> Result<bool, StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StorageError::Backend("Lock poisoned".into()))?;

        Ok(records.contains_key(id))
    }
}
