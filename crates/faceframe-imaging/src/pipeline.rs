//! The pure render pipeline.
//!
//! Faces in, JPEG bytes out: box the faces, union, expand, crop, colorize,
//! composite, encode. No I/O and no shared state; given the same inputs the
//! same bytes come back.

use image::DynamicImage;
use tracing::debug;

use crate::codec::encode_jpeg;
use crate::colorize::colorize;
use crate::error::{ImagingError, ImagingResult};
use crate::frame::FrameTemplate;
use faceframe_models::{BoundingBox, EncodingConfig, HouseStyle, NormalizedFace};

/// Render a face-centered, house-styled, framed portrait of `source`.
///
/// `faces` must be non-empty; the zero-face case is the caller's decision to
/// make (it is an expected detector outcome, not a render error).
pub fn render(
    source: &DynamicImage,
    faces: &[NormalizedFace],
    frame: &FrameTemplate,
    style: &HouseStyle,
    encoding: &EncodingConfig,
) -> ImagingResult<Vec<u8>> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(ImagingError::ZeroDimensions);
    }

    let boxes: Vec<BoundingBox> = faces
        .iter()
        .map(|f| BoundingBox::from_normalized(f, width, height))
        .collect();

    let crop = BoundingBox::union(&boxes)?.expand_symmetric(width, height);

    debug!(
        faces = faces.len(),
        crop = format!(
            "{},{} {}x{}",
            crop.left,
            crop.top,
            crop.width(),
            crop.height()
        ),
        "Cropping around detected faces"
    );

    let cropped = source
        .crop_imm(crop.left, crop.top, crop.width(), crop.height())
        .to_rgba8();

    let styled = colorize(cropped, style);
    let framed = frame.composite(&styled)?;
    encode_jpeg(&framed, encoding)
}
