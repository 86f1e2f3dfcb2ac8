use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use async_trait::async_trait;
use clipstore_core::models::VideoId;
use futures::StreamExt;
use tokio::fs;
use uuid::Uuid;

use crate::traits::{BlobReader, BlobStore, BlobStream, StorageError, StorageResult};

const BLOBS_DIR: &str = "blobs";
const TMP_DIR: &str = "tmp";

/// Local filesystem blob store.
///
/// Committed blobs live at `root/blobs/{id}`; uploads are staged under
/// `root/tmp` and renamed into place once fully written and fsynced.
pub struct LocalBlobStore {
    root: PathBuf,
    // One async mutex per id serializes writes to that blob. Reads never
    // take these locks; the atomic rename keeps them consistent.
    write_locks: Mutex<HashMap<VideoId, Arc<tokio::sync::Mutex<()>>>>,
}

impl LocalBlobStore {
    /// Create a new LocalBlobStore rooted at `root`.
    ///
    /// Establishes the `blobs/` and `tmp/` directories; idempotent, and safe
    /// to call from concurrent initializers.
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        for dir in [BLOBS_DIR, TMP_DIR] {
            let path = root.join(dir);
            fs::create_dir_all(&path).await.map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    path.display(),
                    e
                ))
            })?;
        }

        Ok(LocalBlobStore {
            root,
            write_locks: Mutex::new(HashMap::new()),
        })
    }

    fn blob_path(&self, id: VideoId) -> PathBuf {
        self.root.join(BLOBS_DIR).join(id.to_string())
    }

    fn staging_path(&self) -> PathBuf {
        self.root.join(TMP_DIR).join(Uuid::new_v4().to_string())
    }

    fn write_lock(&self, id: VideoId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .write_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(id).or_default().clone()
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, id: VideoId, mut reader: BlobReader) -> StorageResult<u64> {
        let lock = self.write_lock(id);
        let _guard = lock.lock().await;

        let staging = self.staging_path();
        let path = self.blob_path(id);
        let start = Instant::now();

        let mut file = fs::File::create(&staging).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create staging file {}: {}",
                staging.display(),
                e
            ))
        })?;

        let bytes_copied = match tokio::io::copy(&mut reader, &mut file).await {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                let _ = fs::remove_file(&staging).await;
                return Err(StorageError::WriteFailed(format!(
                    "Failed to drain upload stream for video {}: {}",
                    id, e
                )));
            }
        };

        if let Err(e) = file.sync_all().await {
            drop(file);
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::WriteFailed(format!(
                "Failed to sync staging file {}: {}",
                staging.display(),
                e
            )));
        }
        drop(file);

        // Atomic on POSIX filesystems; readers of the old blob keep their
        // open handle, new readers see the new blob.
        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::WriteFailed(format!(
                "Failed to commit blob {}: {}",
                path.display(),
                e
            )));
        }

        tracing::info!(
            video_id = %id,
            path = %path.display(),
            size_bytes = bytes_copied,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Blob write committed"
        );

        Ok(bytes_copied)
    }

    async fn read_stream(&self, id: VideoId) -> StorageResult<BlobStream> {
        let path = self.blob_path(id);

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(id));
        }

        let file = fs::File::open(&path).await.map_err(|e| {
            StorageError::ReadFailed(format!("Failed to open blob {}: {}", path.display(), e))
        })?;

        let stream = tokio_util::io::ReaderStream::new(file).map(|chunk| {
            chunk.map_err(|e| StorageError::ReadFailed(format!("Failed to read chunk: {}", e)))
        });

        Ok(Box::pin(stream))
    }

    async fn exists(&self, id: VideoId) -> StorageResult<bool> {
        Ok(fs::try_exists(self.blob_path(id)).await.unwrap_or(false))
    }

    async fn content_length(&self, id: VideoId) -> StorageResult<u64> {
        let path = self.blob_path(id);
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound(id)),
            Err(e) => Err(StorageError::ReadFailed(format!(
                "Failed to stat blob {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
