//! Detection service request/response types.

use serde::{Deserialize, Serialize};

use faceframe_models::NormalizedFace;

/// Request body for face detection and moderation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Base64-encoded image bytes.
    pub image: String,
    /// Minimum label confidence (0-100); moderation endpoint only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f32>,
}

/// A single detected face.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceDetail {
    /// Bounding box in normalized coordinates.
    pub bounding_box: NormalizedFace,
    /// Detection confidence (0-100).
    pub confidence: f64,
}

/// Response from the face-detection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectFacesResponse {
    /// Detected faces, possibly empty.
    pub faces: Vec<FaceDetail>,
}

/// A content-moderation label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationLabel {
    /// Label name, e.g. "Explicit Nudity".
    pub name: String,
    /// Parent label name in the taxonomy, if any.
    #[serde(default)]
    pub parent_name: Option<String>,
    /// Label confidence (0-100).
    pub confidence: f32,
}

/// Response from the moderation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResponse {
    /// Labels at or above the requested confidence floor.
    pub labels: Vec<ModerationLabel>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
