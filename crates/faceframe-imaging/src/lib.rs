//! Pixel pipeline for FaceFrame portraits.
//!
//! This crate provides:
//! - Image decode/encode (JPEG out)
//! - The house-style HSV remap
//! - Frame template loading and compositing
//! - The pure render pipeline: crop around faces, colorize, paste into frame
//!
//! Everything here is synchronous and deterministic; I/O and the
//! face-detection call live with the worker.

pub mod codec;
pub mod colorize;
pub mod error;
pub mod frame;
pub mod pipeline;

pub use codec::{decode_image, encode_jpeg};
pub use colorize::colorize;
pub use error::{ImagingError, ImagingResult};
pub use frame::FrameTemplate;
pub use pipeline::render;
