//! Caller identity extraction
//!
//! Identity resolution happens upstream (gateway or auth proxy); the
//! Authorization header carries the already-resolved caller identity
//! verbatim, and this server trusts it.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use depot_registry::entities::UserId;

use crate::error::ApiError;

/// The caller identity resolved from the Authorization header
#[derive(Debug, Clone)]
pub struct Caller(pub UserId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::MissingIdentity)?;

        Ok(Caller(UserId::from(identity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Caller, ApiError> {
        let (mut parts, _) = request.into_parts();
        Caller::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_identity_from_authorization_header() {
        let request = Request::builder()
            .header("Authorization", "test_user")
            .body(())
            .unwrap();

        let caller = extract(request).await.unwrap();
        assert_eq!(caller.0, UserId::from("test_user"));
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let request = Request::builder().body(()).unwrap();
        assert!(matches!(
            extract(request).await,
            Err(ApiError::MissingIdentity)
        ));
    }

    #[tokio::test]
    async fn test_blank_header_is_rejected() {
        let request = Request::builder()
            .header("Authorization", "   ")
            .body(())
            .unwrap();

        assert!(matches!(
            extract(request).await,
            Err(ApiError::MissingIdentity)
        ));
    }
}
