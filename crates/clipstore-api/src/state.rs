//! Application state shared across handlers.
//!
//! Built once at startup and handed to the router behind an `Arc`; there is
//! no ambient global state, so tests construct isolated instances with their
//! own catalog and storage root.

use std::sync::Arc;

use clipstore_catalog::VideoCatalog;
use clipstore_core::Config;
use clipstore_storage::BlobStore;

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<VideoCatalog>,
    pub storage: Arc<dyn BlobStore>,
}
