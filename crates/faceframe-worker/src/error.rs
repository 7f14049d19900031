//! Worker error types.

use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

#[derive(Debug, Error)]
pub enum WorkerError {
    /// The detector found no faces. An expected outcome; the caller picks
    /// the user-visible fallback response, nothing crashed.
    #[error("No face detected in the photo")]
    MissingFace,

    /// The moderation gate flagged the photo.
    #[error("Photo rejected by content moderation")]
    ExplicitContent,

    #[error("Imaging error: {0}")]
    Imaging(#[from] faceframe_imaging::ImagingError),

    #[error("Detector error: {0}")]
    Detector(#[from] faceframe_detector::DetectorError),

    #[error("Storage error: {0}")]
    Storage(#[from] faceframe_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    /// Whether this is a normal per-photo outcome (reply to the user) as
    /// opposed to an infrastructure failure.
    pub fn is_expected_outcome(&self) -> bool {
        matches!(self, WorkerError::MissingFace | WorkerError::ExplicitContent)
    }
}
