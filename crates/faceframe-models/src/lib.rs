//! Shared data models for the FaceFrame backend.
//!
//! This crate provides:
//! - Face bounding boxes in normalized and pixel coordinates
//! - Box union and symmetric-expansion geometry
//! - House-style color and frame placement parameters
//! - Output encoding configuration

pub mod face;
pub mod rect;
pub mod style;

// Re-export common types
pub use face::NormalizedFace;
pub use rect::{BoundingBox, GeometryError};
pub use style::{EncodingConfig, FramePlacement, HouseStyle};
