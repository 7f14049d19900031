//! Face-detection service client.
//!
//! This crate provides:
//! - The [`FaceDetector`] capability trait the pipeline is written against
//! - An HTTP implementation for the hosted detection service
//! - Moderation-label lookup for the pre-processing content gate
//!
//! Any conforming implementation (local stub, mock, real client) can stand
//! in for the service, so the pipeline is unit-testable without network
//! access.

pub mod client;
pub mod error;
pub mod types;

pub use client::{DetectorConfig, HttpFaceDetector};
pub use error::{DetectorError, DetectorResult};
pub use types::ModerationLabel;

use async_trait::async_trait;

use faceframe_models::NormalizedFace;

/// Pluggable face-detection backend.
///
/// Implementations must not mutate or retain the input image bytes.
#[async_trait]
pub trait FaceDetector: Send + Sync {
    /// Detect faces in an encoded image. An empty result is a normal
    /// outcome, not an error.
    async fn detect_faces(&self, image: &[u8]) -> DetectorResult<Vec<NormalizedFace>>;

    /// Fetch content-moderation labels for an encoded image, filtered to
    /// `min_confidence` (0-100).
    async fn detect_moderation(
        &self,
        image: &[u8],
        min_confidence: f32,
    ) -> DetectorResult<Vec<ModerationLabel>>;
}
