//! Access sharing and revocation routes

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use depot_registry::entities::{PackageId, UserId};
use tracing::{debug, info};

use crate::{
    AppState,
    auth::Caller,
    error::{ApiError, Result},
    models::{AccessListResponse, ShareRequest},
};

/// Create access routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{owner}/{name}", get(list_access))
        .route("/{owner}/{name}/{user}", put(share_access).delete(revoke_access))
}

/// Grant a user access to a package
async fn share_access(
    State(state): State<AppState>,
    Path((owner, name, target)): Path<(String, String, String)>,
    Caller(caller): Caller,
    body: Bytes,
) -> Result<StatusCode> {
    // Clients may send no body at all, or an empty body with a JSON
    // content type; both mean "share with the user in the path".
    if !body.is_empty() {
        let request: ShareRequest =
            serde_json::from_slice(&body).map_err(|e| ApiError::validation(&e.to_string()))?;

        // The body may repeat the path's target user; a conflicting user is
        // a client bug the server should not resolve silently.
        if let Some(user) = request.user {
            if user != target {
                return Err(ApiError::validation(
                    "Body user does not match the user in the path",
                ));
            }
        }
    }

    let id = PackageId::new(owner, name);
    info!("Share of {} with {} by {}", id, target, caller);

    state
        .registry
        .share(&caller, &id, &UserId::from(target))
        .await?;

    Ok(StatusCode::OK)
}

/// Withdraw a user's access to a package
async fn revoke_access(
    State(state): State<AppState>,
    Path((owner, name, target)): Path<(String, String, String)>,
    Caller(caller): Caller,
) -> Result<StatusCode> {
    let id = PackageId::new(owner, name);
    info!("Revoke of {} from {} by {}", id, target, caller);

    state
        .registry
        .revoke(&caller, &id, &UserId::from(target))
        .await?;

    Ok(StatusCode::OK)
}

/// List the identities with access to a package
async fn list_access(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
    Caller(caller): Caller,
) -> Result<Json<AccessListResponse>> {
    let id = PackageId::new(owner, name);
    debug!("Access list of {} requested by {}", id, caller);

    let mut users: Vec<String> = state
        .registry
        .list_access(&caller, &id)
        .await?
        .into_iter()
        .map(|user| user.0)
        .collect();
    users.sort();

    Ok(Json(AccessListResponse { users }))
}
