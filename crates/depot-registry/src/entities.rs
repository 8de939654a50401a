//! Core data structures for the depot registry

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::OffsetDateTime;

/// Unique identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key identifying a package: owner namespace plus package name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    /// Identity that owns the package namespace
    pub owner: UserId,

    /// Package name within the owner's namespace
    pub name: String,
}

impl PackageId {
    pub fn new(owner: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A package with its hash-addressed version history
///
/// Created on the owner's first push. The history is append-only in push
/// order; the current hash is always the last pushed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Owner and name of the package
    pub id: PackageId,

    /// Content hash of the most recently pushed version
    pub current_hash: String,

    /// All pushed hashes in push order
    pub history: Vec<String>,

    /// When the package was first pushed
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Last time a version was pushed
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Package {
    /// Create a package from its first pushed hash
    pub fn new(id: PackageId, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        let now = OffsetDateTime::now_utc();
        Self {
            id,
            current_hash: hash.clone(),
            history: vec![hash],
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a newly pushed hash and make it current
    pub fn push_hash(&mut self, hash: impl Into<String>) {
        let hash = hash.into();
        self.history.push(hash.clone());
        self.current_hash = hash;
        self.updated_at = OffsetDateTime::now_utc();
    }

    /// The identity that owns this package
    pub fn owner(&self) -> &UserId {
        &self.id.owner
    }
}

/// The set of identities permitted to read and push a package
///
/// The owner is seeded at creation and can never be removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEntry {
    package: PackageId,
    users: HashSet<UserId>,
}

impl AccessEntry {
    /// Create the access entry for a new package, seeded with its owner
    pub fn new(package: PackageId) -> Self {
        let mut users = HashSet::new();
        users.insert(package.owner.clone());
        Self { package, users }
    }

    /// The identity that owns the guarded package
    pub fn owner(&self) -> &UserId {
        &self.package.owner
    }

    /// Whether the given identity may read and push the package
    pub fn contains(&self, user: &UserId) -> bool {
        self.users.contains(user)
    }

    /// Grant access to an identity; returns false if already a member
    pub fn grant(&mut self, user: UserId) -> bool {
        self.users.insert(user)
    }

    /// Remove an identity's access; returns false if not a member.
    ///
    /// The owner is never removed, regardless of the argument.
    pub fn remove(&mut self, user: &UserId) -> bool {
        if user == &self.package.owner {
            return false;
        }
        self.users.remove(user)
    }

    /// Current membership, order-independent
    pub fn users(&self) -> &HashSet<UserId> {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// The per-key unit of storage: a package together with its access entry
///
/// Stored and replaced as one record so a push or membership change is
/// atomic against the backing store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRecord {
    pub package: Package,
    pub access: AccessEntry,
}

impl PackageRecord {
    /// Create the record for a package's first push
    pub fn new(id: PackageId, hash: impl Into<String>) -> Self {
        Self {
            access: AccessEntry::new(id.clone()),
            package: Package::new(id, hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_hash_appends_and_updates_current() {
        let id = PackageId::new("alice", "dataset");
        let mut package = Package::new(id, "111");

        package.push_hash("222");
        package.push_hash("333");

        assert_eq!(package.current_hash, "333");
        assert_eq!(package.history, vec!["111", "222", "333"]);
    }

    #[test]
    fn test_access_entry_seeds_owner() {
        let entry = AccessEntry::new(PackageId::new("alice", "dataset"));

        assert_eq!(entry.len(), 1);
        assert!(entry.contains(&UserId::from("alice")));
    }

    #[test]
    fn test_owner_cannot_be_removed() {
        let mut entry = AccessEntry::new(PackageId::new("alice", "dataset"));

        assert!(!entry.remove(&UserId::from("alice")));
        assert!(entry.contains(&UserId::from("alice")));
    }

    #[test]
    fn test_grant_and_remove_membership() {
        let mut entry = AccessEntry::new(PackageId::new("alice", "dataset"));

        assert!(entry.grant(UserId::from("bob")));
        assert!(!entry.grant(UserId::from("bob")));
        assert_eq!(entry.len(), 2);

        assert!(entry.remove(&UserId::from("bob")));
        assert!(!entry.remove(&UserId::from("bob")));
        assert_eq!(entry.len(), 1);
    }

    #[test]
    fn test_package_id_display() {
        let id = PackageId::new("alice", "dataset");
        assert_eq!(id.to_string(), "alice/dataset");
    }
}
