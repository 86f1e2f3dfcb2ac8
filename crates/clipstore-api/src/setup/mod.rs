//! Application setup and initialization
//!
//! All startup logic lives here rather than in main.rs, so tests can build
//! an application with their own state.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use clipstore_catalog::VideoCatalog;
use clipstore_core::Config;
use clipstore_storage::create_blob_store;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!(
        environment = %config.environment(),
        storage_root = %config.storage_root(),
        "Configuration loaded"
    );

    // Establish the blob store backing directory exactly once
    let storage = create_blob_store(&config).await?;

    // The catalog starts empty; records do not survive a restart, blobs do
    let catalog = Arc::new(VideoCatalog::new());

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        storage,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
