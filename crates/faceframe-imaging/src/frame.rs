//! Frame template loading and compositing.
//!
//! The frame is a fixed decorative background loaded once at startup and
//! shared read-only across invocations; `composite` always works on a fresh
//! copy of it.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::codec::decode_image;
use crate::error::{ImagingError, ImagingResult};
use faceframe_models::FramePlacement;

/// Default frame asset path in the production container.
pub const DEFAULT_FRAME_PATH: &str = "/app/assets/frame.png";

/// Development fallback paths to check.
const DEV_FRAME_PATHS: &[&str] = &["assets/frame.png", "../assets/frame.png"];

/// Resolve the frame asset path, checking dev fallbacks if the production
/// path is missing.
pub fn resolve_frame_path() -> String {
    if let Ok(path) = std::env::var("FRAME_ASSET_PATH") {
        return path;
    }

    if Path::new(DEFAULT_FRAME_PATH).exists() {
        return DEFAULT_FRAME_PATH.to_string();
    }

    for path in DEV_FRAME_PATHS {
        if Path::new(path).exists() {
            debug!(path = path, "Found frame asset at dev fallback path");
            return path.to_string();
        }
    }

    DEFAULT_FRAME_PATH.to_string()
}

/// The decorative frame a subject photo is pasted into.
#[derive(Debug, Clone)]
pub struct FrameTemplate {
    image: RgbaImage,
    placement: FramePlacement,
}

impl FrameTemplate {
    /// Build a template from an already-decoded background image.
    pub fn new(image: RgbaImage, placement: FramePlacement) -> Self {
        Self { image, placement }
    }

    /// Load the template from a file path.
    pub fn load(path: impl AsRef<Path>, placement: FramePlacement) -> ImagingResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|_| ImagingError::FrameAssetNotFound(path.to_path_buf()))?;
        let image = decode_image(&bytes)?.to_rgba8();

        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Loaded frame template"
        );

        Ok(Self::new(image, placement))
    }

    /// Frame dimensions in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Paste `subject` into a fresh copy of the frame.
    ///
    /// The subject is resized to `placement.target_width` with its aspect
    /// ratio preserved (height truncated), then centered vertically within
    /// the paste slot. Destination pixels are overwritten outright; the
    /// subject's alpha is not blended against the frame. A subject taller
    /// than the slot gets a negative paste offset and is clipped.
    pub fn composite(&self, subject: &RgbaImage) -> ImagingResult<RgbaImage> {
        let (w, h) = subject.dimensions();
        if w == 0 || h == 0 {
            return Err(ImagingError::ZeroDimensions);
        }

        let p = &self.placement;
        let new_w = p.target_width;
        let new_h = ((new_w as u64 * h as u64) / w as u64) as u32;
        if new_h == 0 {
            return Err(ImagingError::ZeroDimensions);
        }

        let resized = imageops::resize(subject, new_w, new_h, FilterType::Lanczos3);

        let left = p.region_left as i64;
        let top = p.region_top as i64 + (p.region_height as i64 - new_h as i64) / 2;

        debug!(
            subject = format!("{}x{}", w, h),
            resized = format!("{}x{}", new_w, new_h),
            left,
            top,
            "Compositing subject into frame"
        );

        let mut out = self.image.clone();
        imageops::replace(&mut out, &resized, left, top);
        Ok(out)
    }
}
