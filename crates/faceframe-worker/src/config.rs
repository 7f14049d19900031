//! Worker configuration.

use faceframe_imaging::frame::resolve_frame_path;
use faceframe_models::EncodingConfig;

/// Worker configuration.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Path to the frame template asset
    pub frame_path: String,
    /// Minimum confidence for moderation labels to count (0-100)
    pub moderation_min_confidence: f32,
    /// Output encoding settings
    pub encoding: EncodingConfig,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            frame_path: resolve_frame_path(),
            moderation_min_confidence: 50.0,
            encoding: EncodingConfig::default(),
        }
    }
}

impl WorkerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            frame_path: resolve_frame_path(),
            moderation_min_confidence: std::env::var("MODERATION_MIN_CONFIDENCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50.0),
            encoding: EncodingConfig {
                jpeg_quality: std::env::var("OUTPUT_JPEG_QUALITY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| EncodingConfig::default().jpeg_quality),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkerConfig::default();
        assert!((config.moderation_min_confidence - 50.0).abs() < f32::EPSILON);
        assert_eq!(config.encoding.jpeg_quality, 75);
    }
}
