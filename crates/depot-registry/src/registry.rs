//! Access-control engine for package push, read, and sharing
//!
//! Every operation takes the resolved caller identity as an explicit input;
//! the engine decides whether that identity may perform it and mutates the
//! backing store accordingly. Unauthorized read-path access is reported as
//! `NotFound`, indistinguishable from a missing package.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::address::ObjectKey;
use crate::entities::{PackageId, PackageRecord, UserId};
use crate::error::{RegistryError, Result};
use crate::grant::{GrantSigner, StorageGrant};
use crate::storage::MetadataStore;

/// What an authorized reader sees: package metadata plus a download grant
/// for the current version
#[derive(Debug, Clone)]
pub struct PackageView {
    pub package: crate::entities::Package,
    pub download: StorageGrant,
}

/// The package registry engine
///
/// Mutations of the same package key serialize through a per-key lock, so
/// concurrent shares and revokes never lose membership updates. Operations
/// on different keys proceed in parallel.
pub struct Registry {
    store: Arc<dyn MetadataStore>,
    signer: GrantSigner,
    locks: Mutex<HashMap<PackageId, Arc<Mutex<()>>>>,
}

impl Registry {
    /// Create a registry over the given store and grant signer
    pub fn new(store: Arc<dyn MetadataStore>, signer: GrantSigner) -> Self {
        Self {
            store,
            signer,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The signer used for upload and download grants
    pub fn signer(&self) -> &GrantSigner {
        &self.signer
    }

    async fn key_lock(&self, id: &PackageId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Push a package version and obtain an upload grant for its blob.
    ///
    /// Creates the package on the owner's first push, seeding the access
    /// entry with the owner. On an existing package, any access-entry member
    /// may push; the hash is appended to history and becomes current.
    pub async fn push(&self, caller: &UserId, id: &PackageId, hash: &str) -> Result<StorageGrant> {
        if !ObjectKey::is_valid_hash(hash) {
            return Err(RegistryError::InvalidHash(hash.to_string()));
        }

        let lock = self.key_lock(id).await;
        let _guard = lock.lock().await;

        match self.store.get(id).await? {
            None => {
                // Packages are created in their owner's namespace only.
                if caller != &id.owner {
                    return Err(RegistryError::Forbidden(format!(
                        "{} cannot create packages under {}",
                        caller, id.owner
                    )));
                }
                self.store.put(&PackageRecord::new(id.clone(), hash)).await?;
            }
            Some(mut record) => {
                if !record.access.contains(caller) {
                    return Err(RegistryError::Forbidden(format!(
                        "{} may not push to {}",
                        caller, id
                    )));
                }
                record.package.push_hash(hash);
                self.store.put(&record).await?;
            }
        }

        Ok(self
            .signer
            .upload_url(id.owner.as_ref(), &id.name, hash))
    }

    /// Read package metadata together with a download grant for the current
    /// version. Missing package and unauthorized caller are both `NotFound`.
    pub async fn read(&self, caller: &UserId, id: &PackageId) -> Result<PackageView> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;

        if !record.access.contains(caller) {
            return Err(RegistryError::not_found(id));
        }

        let download =
            self.signer
                .download_url(id.owner.as_ref(), &id.name, &record.package.current_hash);

        Ok(PackageView {
            package: record.package,
            download,
        })
    }

    /// Grant a user read-and-push access to a package.
    ///
    /// Owner-only. Idempotent: sharing an existing member succeeds without
    /// change. Non-owner callers get `NotFound`, same as the read path.
    pub async fn share(&self, caller: &UserId, id: &PackageId, target: &UserId) -> Result<()> {
        let lock = self.key_lock(id).await;
        let _guard = lock.lock().await;

        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;

        if caller != &id.owner {
            return Err(RegistryError::not_found(id));
        }

        if record.access.grant(target.clone()) {
            self.store.put(&record).await?;
        }

        Ok(())
    }

    /// Withdraw a user's access to a package.
    ///
    /// Owner-only, and the owner's own access is immutable: revoking the
    /// owner fails with `Forbidden` no matter who asks. Removing a
    /// non-member is a no-op success.
    pub async fn revoke(&self, caller: &UserId, id: &PackageId, target: &UserId) -> Result<()> {
        let lock = self.key_lock(id).await;
        let _guard = lock.lock().await;

        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;

        // Rights before the owner-target invariant: unauthorized callers
        // must not learn the package exists from a 403.
        if caller != &id.owner {
            return Err(RegistryError::not_found(id));
        }

        if target == &id.owner {
            return Err(RegistryError::Forbidden(format!(
                "Owner access to {} cannot be revoked",
                id
            )));
        }

        if record.access.remove(target) {
            self.store.put(&record).await?;
        }

        Ok(())
    }

    /// List the full access membership of a package: owner plus sharees,
    /// order-independent. Member-only, with the uniform `NotFound` policy.
    pub async fn list_access(&self, caller: &UserId, id: &PackageId) -> Result<Vec<UserId>> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(id))?;

        if !record.access.contains(caller) {
            return Err(RegistryError::not_found(id));
        }

        Ok(record.access.users().iter().cloned().collect())
    }
}
