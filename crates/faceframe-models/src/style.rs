//! House-style transform and frame placement parameters.
//!
//! These are deployment-fixed values, modeled as plain config structs so
//! tests can run the pipeline with alternate geometries instead of digging
//! constants out of the pixel code.

use serde::{Deserialize, Serialize};

/// Parameters of the fixed HSV remap applied to every processed photo.
///
/// Hue is replaced outright (not rotated); saturation and value are curved
/// with power functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseStyle {
    /// Replacement hue, as a fraction of the color wheel (0.0 to 1.0).
    pub hue: f64,
    /// Exponent applied to saturation. Below 1.0 pushes saturation up.
    pub saturation_exponent: f64,
    /// Exponent applied to value. Above 1.0 darkens the image.
    pub value_exponent: f64,
}

impl Default for HouseStyle {
    fn default() -> Self {
        Self {
            hue: 0.82,
            saturation_exponent: 0.65,
            value_exponent: 1.3,
        }
    }
}

/// Where, and at what width, the subject photo lands inside the frame.
///
/// The subject is scaled to `target_width` and centered vertically within a
/// slot of `region_height` pixels starting at `region_top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePlacement {
    /// Width the subject is resized to, in pixels.
    pub target_width: u32,
    /// Top edge of the paste slot.
    pub region_top: u32,
    /// Height of the paste slot the subject is centered in.
    pub region_height: u32,
    /// Left edge of the paste position.
    pub region_left: u32,
}

impl Default for FramePlacement {
    fn default() -> Self {
        Self {
            target_width: 234,
            region_top: 262,
            region_height: 362,
            region_left: 206,
        }
    }
}

/// Output encoding settings for the finished portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self { jpeg_quality: 75 }
    }
}
