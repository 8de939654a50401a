//! # Depot Registry
//!
//! The access-control and versioning engine for a hash-addressed package
//! registry:
//! - Packages keyed by (owner, name) with an append-only hash history
//! - Per-package access entries: the owner plus any shared users, with the
//!   owner permanently a member
//! - Share/revoke of read-and-push access, idempotent and race-safe per key
//! - Pre-signed upload and download URLs scoped to one specific blob
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use depot_registry::{GrantSigner, MemoryStore, Registry};
//! use depot_registry::entities::{PackageId, UserId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let signer = GrantSigner::new("http://localhost:9000", "depot-packages", "secret", 900);
//! let registry = Registry::new(store, signer);
//!
//! let alice = UserId::from("alice");
//! let pkg = PackageId::new("alice", "dataset");
//!
//! // First push creates the package and returns where to upload the blob.
//! let grant = registry.push(&alice, &pkg, "9f2c5d8a").await?;
//! println!("upload to: {}", grant.url);
//!
//! // Share read-and-push access with another user.
//! registry.share(&alice, &pkg, &UserId::from("bob")).await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod entities;
pub mod error;
pub mod grant;
pub mod registry;
pub mod storage;

pub use error::{RegistryError, Result};
pub use grant::{GrantMethod, GrantSigner, StorageGrant};
pub use registry::{PackageView, Registry};
pub use storage::{MemoryStore, MetadataStore};
