//! Photo processing worker.
//!
//! This crate provides:
//! - The per-photo pipeline: detect, crop, colorize, frame, encode
//! - The moderation gate applied before any pixel work
//! - Blob-store download/upload around the pipeline
//! - Worker configuration from the environment

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;

pub use config::WorkerConfig;
pub use error::{WorkerError, WorkerResult};
pub use processor::ProcessingContext;
