//! Photo job processing.
//!
//! Wraps the pure pipeline with its collaborators: download the source
//! photo from the unprocessed store, run the moderation gate, render, and
//! upload the finished JPEG to the processed store under the same key.

use std::sync::Arc;

use tracing::info;

use faceframe_detector::{FaceDetector, HttpFaceDetector};
use faceframe_imaging::FrameTemplate;
use faceframe_models::HouseStyle;
use faceframe_storage::{BlobStore, S3BlobStore};

use crate::config::WorkerConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::pipeline::{is_explicit, process_photo_bytes};

/// Collaborators and fixed state for photo processing.
///
/// The frame template is loaded once and shared read-only across
/// invocations; every other piece of state is per-photo.
pub struct ProcessingContext {
    pub config: WorkerConfig,
    pub unprocessed: Arc<dyn BlobStore>,
    pub processed: Arc<dyn BlobStore>,
    pub detector: Arc<dyn FaceDetector>,
    pub frame: Arc<FrameTemplate>,
    pub style: HouseStyle,
}

impl ProcessingContext {
    /// Build a context from the environment: S3-backed stores, the HTTP
    /// detector client, and the frame asset from disk.
    pub async fn new(config: WorkerConfig) -> WorkerResult<Self> {
        let unprocessed = S3BlobStore::from_env("UNPROCESSED_BUCKET").await?;
        let processed = S3BlobStore::from_env("PROCESSED_BUCKET").await?;
        let detector = HttpFaceDetector::from_env()?;
        let frame = FrameTemplate::load(&config.frame_path, Default::default())?;

        Ok(Self {
            config,
            unprocessed: Arc::new(unprocessed),
            processed: Arc::new(processed),
            detector: Arc::new(detector),
            frame: Arc::new(frame),
            style: HouseStyle::default(),
        })
    }

    /// Process one photo by key: download, moderate, render, upload.
    ///
    /// On success the processed store holds a JPEG under the same key.
    /// Errors are per-photo; the context stays valid for the next one.
    pub async fn process_photo(&self, key: &str) -> WorkerResult<()> {
        info!(key = key, "Processing photo");

        let source = self.unprocessed.download_bytes(key).await?;

        let labels = self
            .detector
            .detect_moderation(&source, self.config.moderation_min_confidence)
            .await?;
        if is_explicit(&labels) {
            return Err(WorkerError::ExplicitContent);
        }

        let portrait = process_photo_bytes(
            self.detector.as_ref(),
            &self.frame,
            &self.style,
            &self.config.encoding,
            &source,
        )
        .await?;

        self.processed
            .upload_bytes(key, portrait, "image/jpeg")
            .await?;

        info!(key = key, "Photo processed and uploaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceframe_detector::ModerationLabel;

    fn label(name: &str, parent: Option<&str>) -> ModerationLabel {
        ModerationLabel {
            name: name.to_string(),
            parent_name: parent.map(String::from),
            confidence: 80.0,
        }
    }

    #[test]
    fn test_explicit_by_name() {
        assert!(is_explicit(&[label("Explicit Nudity", None)]));
    }

    #[test]
    fn test_explicit_by_parent() {
        assert!(is_explicit(&[label("Graphic Nudity", Some("Explicit Nudity"))]));
    }

    #[test]
    fn test_benign_labels_pass() {
        assert!(!is_explicit(&[
            label("Suggestive", None),
            label("Smoking", Some("Tobacco")),
        ]));
        assert!(!is_explicit(&[]));
    }
}
