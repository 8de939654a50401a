//! Error types for the depot registry

use thiserror::Error;

/// Registry-specific errors
///
/// `NotFound` covers both a genuinely missing package and an unauthorized
/// read-path access: callers without membership must not be able to tell
/// whether a package exists.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid content hash: {0}")]
    InvalidHash(String),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

impl RegistryError {
    /// Uniform not-found error for a package key, used for both absence
    /// and unauthorized access
    pub fn not_found(id: &crate::entities::PackageId) -> Self {
        Self::NotFound(id.to_string())
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
