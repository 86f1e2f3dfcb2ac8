//! Clipstore Storage Library
//!
//! This crate provides the blob storage abstraction and the local filesystem
//! backend.
//!
//! # Storage layout
//!
//! One file per video id under the configured root:
//!
//! - committed blobs: `blobs/{id}`
//! - in-flight uploads: `tmp/{random}` staging files
//!
//! An upload is drained to a staging file, fsynced, and renamed into
//! `blobs/` only after the source stream reached EOF. The rename is atomic,
//! so a concurrent reader observes either the previous complete blob or the
//! new complete blob, never a mix; a failed upload removes its staging file
//! and leaves the committed blob untouched.

pub mod factory;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_blob_store;
pub use local::LocalBlobStore;
pub use traits::{BlobReader, BlobStore, BlobStream, StorageError, StorageResult};
