//! Blob storage for photos.
//!
//! This crate provides:
//! - The [`BlobStore`] capability trait (byte-addressable read/write by key)
//! - An S3-backed implementation
//!
//! The pipeline only ever sees the trait, so tests can substitute an
//! in-memory store.

pub mod client;
pub mod error;

pub use client::{S3BlobStore, S3Config};
pub use error::{StorageError, StorageResult};

use async_trait::async_trait;

/// Byte-addressable blob storage.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Download an object as bytes.
    async fn download_bytes(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Upload bytes under a key.
    async fn upload_bytes(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> StorageResult<()>;

    /// Check if an object exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
