//! Object keys for hash-addressed package blobs
//!
//! Every pushed version lives at one bucket object whose path encodes the
//! full (owner, name, hash) triple. Clients parse these paths, so the shape
//! is a wire contract.

/// Utilities for building and validating blob object keys
pub struct ObjectKey;

impl ObjectKey {
    /// Key of a package blob inside the bucket
    /// Example: "alice/dataset/9f2c..."
    pub fn blob(owner: &str, name: &str, hash: &str) -> String {
        format!("{}/{}/{}", owner, name, hash)
    }

    /// Absolute object path including the bucket
    /// Example: "/depot-packages/alice/dataset/9f2c..."
    pub fn bucket_path(bucket: &str, owner: &str, name: &str, hash: &str) -> String {
        format!("/{}/{}", bucket, Self::blob(owner, name, hash))
    }

    /// Validate a pushed content hash before it becomes a path segment.
    ///
    /// Hashes are opaque identifiers chosen by the client; the registry only
    /// requires that they are usable as a single object-key segment.
    pub fn is_valid_hash(hash: &str) -> bool {
        if hash.is_empty() || hash.len() > 128 {
            return false;
        }

        !hash.contains('/') && !hash.chars().any(char::is_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_key_generation() {
        assert_eq!(
            ObjectKey::blob("alice", "dataset", "abc123"),
            "alice/dataset/abc123"
        );
    }

    #[test]
    fn test_bucket_path_generation() {
        assert_eq!(
            ObjectKey::bucket_path("depot-packages", "alice", "dataset", "abc123"),
            "/depot-packages/alice/dataset/abc123"
        );
    }

    #[test]
    fn test_hash_validation() {
        assert!(ObjectKey::is_valid_hash("123"));
        assert!(ObjectKey::is_valid_hash(&"a".repeat(128)));

        assert!(!ObjectKey::is_valid_hash(""));
        assert!(!ObjectKey::is_valid_hash(&"a".repeat(129)));
        assert!(!ObjectKey::is_valid_hash("abc/def"));
        assert!(!ObjectKey::is_valid_hash("abc def"));
        assert!(!ObjectKey::is_valid_hash("abc\n"));
    }
}
