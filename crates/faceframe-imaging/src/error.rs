//! Error types for imaging operations.

use std::path::PathBuf;
use thiserror::Error;

use faceframe_models::GeometryError;

/// Result type for imaging operations.
pub type ImagingResult<T> = Result<T, ImagingError>;

/// Errors that can occur while rendering a portrait.
#[derive(Debug, Error)]
pub enum ImagingError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("frame asset not found: {0}")]
    FrameAssetNotFound(PathBuf),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
