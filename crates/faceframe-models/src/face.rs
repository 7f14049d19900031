use serde::{Deserialize, Serialize};

/// A face bounding box in normalized coordinates (0.0 to 1.0), relative to
/// the dimensions of the image it was detected in.
///
/// This is the wire format returned by the face-detection service; convert
/// to a [`crate::BoundingBox`] before doing any pixel work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFace {
    /// X coordinate of the top-left corner (0.0 = left, 1.0 = right)
    pub left: f64,
    /// Y coordinate of the top-left corner (0.0 = top, 1.0 = bottom)
    pub top: f64,
    /// Width of the box (0.0 to 1.0)
    pub width: f64,
    /// Height of the box (0.0 to 1.0)
    pub height: f64,
}

impl NormalizedFace {
    /// Create a new normalized face box.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Check if the box is within the 0.0-1.0 range.
    pub fn is_valid(&self) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.width > 0.0
            && self.height > 0.0
            && self.left + self.width <= 1.001 // Allow small epsilon for float precision
            && self.top + self.height <= 1.001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_face() {
        let face = NormalizedFace::new(0.1, 0.2, 0.3, 0.4);
        assert!(face.is_valid());
    }

    #[test]
    fn test_out_of_range_face() {
        assert!(!NormalizedFace::new(-0.1, 0.2, 0.3, 0.4).is_valid());
        assert!(!NormalizedFace::new(0.8, 0.2, 0.3, 0.4).is_valid());
        assert!(!NormalizedFace::new(0.1, 0.2, 0.0, 0.4).is_valid());
    }

    #[test]
    fn test_serde_round_trip() {
        let face = NormalizedFace::new(0.1, 0.1, 0.2, 0.2);
        let json = serde_json::to_string(&face).unwrap();
        let back: NormalizedFace = serde_json::from_str(&json).unwrap();
        assert_eq!(face, back);
    }
}
