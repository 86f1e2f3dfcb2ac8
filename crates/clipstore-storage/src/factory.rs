use std::sync::Arc;

use clipstore_core::Config;

use crate::{BlobStore, LocalBlobStore, StorageResult};

/// Create the blob store for the configured storage root.
///
/// Initialization is idempotent: backing directories are created when missing
/// and verified otherwise, so repeated or concurrent calls observe the same
/// store.
pub async fn create_blob_store(config: &Config) -> StorageResult<Arc<dyn BlobStore>> {
    let store = LocalBlobStore::new(config.storage_root()).await?;
    Ok(Arc::new(store))
}
