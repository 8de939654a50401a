//! Request and response types for the package API
//!
//! Bodies are strongly typed and reject unknown fields rather than silently
//! ignoring them.

use depot_registry::PackageView;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of a package push
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushRequest {
    /// Content hash of the version being pushed
    pub hash: String,
}

/// Successful push: where to upload the blob
#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub upload_url: String,
    pub expires_at: i64,
}

/// Optional share body; may repeat the target user from the path
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareRequest {
    pub user: Option<String>,
}

/// Package metadata plus a download grant for the current version
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub owner: String,
    pub name: String,
    pub hash: String,
    pub history: Vec<String>,
    pub url: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<PackageView> for PackageResponse {
    fn from(view: PackageView) -> Self {
        let package = view.package;
        Self {
            owner: package.id.owner.to_string(),
            name: package.id.name,
            hash: package.current_hash,
            history: package.history,
            url: view.download.url,
            created_at: package.created_at,
            updated_at: package.updated_at,
        }
    }
}

/// Membership of a package's access list
#[derive(Debug, Serialize)]
pub struct AccessListResponse {
    pub users: Vec<String>,
}
