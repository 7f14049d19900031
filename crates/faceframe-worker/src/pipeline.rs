//! The per-photo pipeline.
//!
//! One photo flows through a linear sequence of stages, each consuming the
//! previous stage's output: detect faces, decode, render (crop + colorize +
//! composite + encode). Any stage can fail; there is no partial output and
//! no retrying here. Either complete JPEG bytes come back or an error is
//! the sole outcome.

use tracing::{debug, info};

use faceframe_detector::{FaceDetector, ModerationLabel};
use faceframe_imaging::{decode_image, render, FrameTemplate};
use faceframe_models::{EncodingConfig, HouseStyle};

use crate::error::{WorkerError, WorkerResult};

/// Moderation label that blocks processing, matched against both the label
/// itself and its parent in the taxonomy.
const BLOCKED_LABEL: &str = "Explicit Nudity";

/// Check moderation labels for blocked content.
pub fn is_explicit(labels: &[ModerationLabel]) -> bool {
    labels.iter().any(|label| {
        label.name == BLOCKED_LABEL || label.parent_name.as_deref() == Some(BLOCKED_LABEL)
    })
}

/// Run the full pipeline over one photo's bytes.
///
/// Zero detected faces is a typed, expected failure
/// ([`WorkerError::MissingFace`]), never a crash or an empty image.
pub async fn process_photo_bytes(
    detector: &dyn FaceDetector,
    frame: &FrameTemplate,
    style: &HouseStyle,
    encoding: &EncodingConfig,
    source: &[u8],
) -> WorkerResult<Vec<u8>> {
    let faces = detector.detect_faces(source).await?;
    if faces.is_empty() {
        return Err(WorkerError::MissingFace);
    }
    debug!(faces = faces.len(), "Faces detected");

    let image = decode_image(source)?;
    let bytes = render(&image, &faces, frame, style, encoding)?;

    info!(
        input_bytes = source.len(),
        output_bytes = bytes.len(),
        "Rendered framed portrait"
    );
    Ok(bytes)
}
