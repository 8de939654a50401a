//! Pre-signed storage grants for package blobs
//!
//! A grant is an ephemeral URL authorizing one HTTP method against one
//! bucket object. Issuing a grant is pure URL construction: it has no side
//! effect on registry state, and the registry never waits for the transfer
//! it authorizes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

use crate::address::ObjectKey;

/// HTTP method a grant authorizes against the storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrantMethod {
    /// Upload a blob
    Put,
    /// Download a blob
    Get,
}

impl GrantMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Put => "PUT",
            Self::Get => "GET",
        }
    }
}

/// An ephemeral pre-signed URL scoped to exactly one (owner, name, hash) blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageGrant {
    /// Full URL the client uses for the transfer
    pub url: String,

    /// Method the signature is valid for
    pub method: GrantMethod,

    /// Expiry as unix seconds
    pub expires_at: i64,
}

/// Issues pre-signed upload and download URLs for bucket objects.
///
/// The URL's path component is always `/{bucket}/{owner}/{name}/{hash}`;
/// the query string carries the authorized method, the expiry, and a hex
/// SHA-256 signature over all three keyed by the configured secret.
#[derive(Debug, Clone)]
pub struct GrantSigner {
    endpoint: String,
    bucket: String,
    secret: String,
    ttl_seconds: u64,
}

impl GrantSigner {
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        secret: impl Into<String>,
        ttl_seconds: u64,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            secret: secret.into(),
            ttl_seconds,
        }
    }

    /// The bucket all grants are scoped to
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Grant authorizing upload of one specific package version
    pub fn upload_url(&self, owner: &str, name: &str, hash: &str) -> StorageGrant {
        self.sign(GrantMethod::Put, owner, name, hash)
    }

    /// Grant authorizing download of one specific package version
    pub fn download_url(&self, owner: &str, name: &str, hash: &str) -> StorageGrant {
        self.sign(GrantMethod::Get, owner, name, hash)
    }

    fn sign(&self, method: GrantMethod, owner: &str, name: &str, hash: &str) -> StorageGrant {
        let path = ObjectKey::bucket_path(&self.bucket, owner, name, hash);
        let expires_at = OffsetDateTime::now_utc().unix_timestamp() + self.ttl_seconds as i64;

        let mut hasher = Sha256::new();
        hasher.update(method.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(path.as_bytes());
        hasher.update(b"\n");
        hasher.update(expires_at.to_string().as_bytes());
        hasher.update(b"\n");
        hasher.update(self.secret.as_bytes());
        let signature = format!("{:x}", hasher.finalize());

        let url = format!(
            "{}{}?method={}&expires={}&signature={}",
            self.endpoint,
            path,
            method.as_str(),
            expires_at,
            signature
        );

        StorageGrant {
            url,
            method,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> GrantSigner {
        GrantSigner::new("http://localhost:9000", "depot-packages", "secret", 900)
    }

    #[test]
    fn test_upload_url_path_is_bucket_scoped() {
        let grant = signer().upload_url("alice", "dataset", "abc123");

        assert!(
            grant
                .url
                .starts_with("http://localhost:9000/depot-packages/alice/dataset/abc123?")
        );
        assert_eq!(grant.method, GrantMethod::Put);
    }

    #[test]
    fn test_download_url_shares_the_blob_path() {
        let signer = signer();
        let up = signer.upload_url("alice", "dataset", "abc123");
        let down = signer.download_url("alice", "dataset", "abc123");

        let path = |url: &str| url.split('?').next().unwrap().to_string();
        assert_eq!(path(&up.url), path(&down.url));
        assert_eq!(down.method, GrantMethod::Get);
    }

    #[test]
    fn test_signature_differs_per_method() {
        let signer = signer();
        let up = signer.upload_url("alice", "dataset", "abc123");
        let down = signer.download_url("alice", "dataset", "abc123");

        let sig = |url: &str| url.split("signature=").nth(1).unwrap().to_string();
        assert_ne!(sig(&up.url), sig(&down.url));
    }

    #[test]
    fn test_trailing_endpoint_slash_is_trimmed() {
        let signer = GrantSigner::new("http://localhost:9000/", "b", "s", 60);
        let grant = signer.upload_url("o", "n", "h");

        assert!(grant.url.starts_with("http://localhost:9000/b/o/n/h?"));
    }

    #[test]
    fn test_expiry_is_in_the_future() {
        let grant = signer().upload_url("alice", "dataset", "abc123");
        assert!(grant.expires_at > OffsetDateTime::now_utc().unix_timestamp());
    }
}
