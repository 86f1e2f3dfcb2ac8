//! Blob storage abstraction trait
//!
//! This module defines the [`BlobStore`] trait the API layer works against,
//! so request handling never couples to a concrete backend.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use clipstore_core::models::VideoId;
use futures::Stream;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("No blob stored for video: {0}")]
    NotFound(VideoId),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte source consumed by [`BlobStore::write`].
pub type BlobReader = Pin<Box<dyn AsyncRead + Send + Unpin>>;

/// Chunk stream produced by [`BlobStore::read_stream`].
pub type BlobStream = Pin<Box<dyn Stream<Item = StorageResult<Bytes>> + Send>>;

/// Blob storage abstraction.
///
/// A blob is an opaque byte sequence associated with exactly one video id.
/// Implementations must serialize writes to the same id (no interleaved
/// bytes from two uploads) and must never expose a partially written blob to
/// readers. Operations on different ids proceed fully in parallel.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Drain `reader` to EOF and persist its bytes as the blob for `id`,
    /// replacing any previous blob. Returns the number of bytes written.
    ///
    /// Transfers use bounded buffering; payload size is unbounded relative
    /// to memory.
    async fn write(&self, id: VideoId, reader: BlobReader) -> StorageResult<u64>;

    /// Stream the committed blob for `id` as bounded-size chunks.
    ///
    /// Fails with [`StorageError::NotFound`] if no blob has ever been
    /// committed for `id`.
    async fn read_stream(&self, id: VideoId) -> StorageResult<BlobStream>;

    /// Check whether a blob has been committed for `id`.
    async fn exists(&self, id: VideoId) -> StorageResult<bool>;

    /// Size in bytes of the committed blob for `id`.
    async fn content_length(&self, id: VideoId) -> StorageResult<u64>;
}
