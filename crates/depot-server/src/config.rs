//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Storage bucket package blobs are uploaded into
    pub bucket: String,

    /// Base URL of the storage backend grants point at
    pub storage_endpoint: String,

    /// Secret used to sign upload/download grants
    pub grant_secret: String,

    /// Grant lifetime in seconds
    pub grant_ttl_seconds: u64,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,

    /// Whether to enable debug logging
    pub debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            bucket: std::env::var("PACKAGE_BUCKET_NAME")
                .unwrap_or_else(|_| "depot-packages".to_string()),
            storage_endpoint: std::env::var("STORAGE_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            grant_secret: std::env::var("GRANT_SECRET")
                .map_err(|_| ApiError::Config("GRANT_SECRET must be set".to_string()))?,
            grant_ttl_seconds: std::env::var("GRANT_TTL_SECONDS")
                .unwrap_or_else(|_| "900".to_string()) // 15 minutes default
                .parse()
                .map_err(|_| ApiError::Config("Invalid GRANT_TTL_SECONDS value".to_string()))?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            debug: std::env::var("DEBUG")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            bucket: "depot-packages".to_string(),
            storage_endpoint: "http://localhost:9000".to_string(),
            grant_secret: "dev-secret".to_string(),
            grant_ttl_seconds: 900,
            cors_origins: vec!["*".to_string()],
            debug: false,
        }
    }
}
