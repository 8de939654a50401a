//! Depot HTTP API server binary
//!
//! Wires the registry engine to the HTTP surface: in-memory metadata store,
//! grant signer for the configured bucket, axum router.

use std::sync::Arc;

use depot_registry::{GrantSigner, MemoryStore, Registry};
use depot_server::{AppState, Result, ServerConfig, create_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "depot_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!("Starting Depot Server on {}:{}", config.host, config.port);

    // Metadata lives in memory; a persistent MetadataStore backend plugs in
    // here.
    let store = Arc::new(MemoryStore::new());
    let signer = GrantSigner::new(
        config.storage_endpoint.as_str(),
        config.bucket.as_str(),
        config.grant_secret.as_str(),
        config.grant_ttl_seconds,
    );
    let registry = Arc::new(Registry::new(store, signer));

    // Create application state
    let state = AppState {
        registry,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
