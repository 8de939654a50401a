//! Package push and read routes

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::put,
};
use depot_registry::entities::PackageId;
use tracing::{debug, info};

use crate::{
    AppState,
    auth::Caller,
    error::{ApiError, Result},
    models::{PackageResponse, PushRequest, PushResponse},
};

/// Create package routes
pub fn router() -> Router<AppState> {
    // Trailing slash is part of the wire contract.
    Router::new().route("/{owner}/{name}/", put(push_package).get(read_package))
}

/// Push a new package version; responds with a pre-signed upload URL
async fn push_package(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    Caller(caller): Caller,
    body: std::result::Result<Json<PushRequest>, JsonRejection>,
) -> Result<Json<PushResponse>> {
    let Json(request) = body.map_err(|e| ApiError::validation(&e.body_text()))?;

    let id = PackageId::new(owner, name);
    info!("Push to {} by {}", id, caller);

    let grant = state.registry.push(&caller, &id, &request.hash).await?;

    Ok(Json(PushResponse {
        upload_url: grant.url,
        expires_at: grant.expires_at,
    }))
}

/// Read package metadata and a download URL for the current version
async fn read_package(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    Caller(caller): Caller,
) -> Result<Json<PackageResponse>> {
    let id = PackageId::new(owner, name);
    debug!("Read of {} by {}", id, caller);

    let view = state.registry.read(&caller, &id).await?;

    Ok(Json(PackageResponse::from(view)))
}
