//! Image decode/encode.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::error::{ImagingError, ImagingResult};
use faceframe_models::EncodingConfig;

/// Decode raw bytes (JPEG, PNG, WebP, ...) into an image.
pub fn decode_image(input: &[u8]) -> ImagingResult<DynamicImage> {
    let image = image::load_from_memory(input).map_err(|e| ImagingError::Decode(e.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(ImagingError::ZeroDimensions);
    }

    Ok(image)
}

/// Encode an RGBA buffer as JPEG.
///
/// JPEG carries no alpha; the channel is dropped rather than blended, the
/// subject having already been pasted opaquely over the frame.
pub fn encode_jpeg(image: &RgbaImage, encoding: &EncodingConfig) -> ImagingResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();

    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, encoding.jpeg_quality);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), image::ColorType::Rgb8)
        .map_err(|e| ImagingError::Encode(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_rgba(width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgba([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
                255,
            ]);
        }
        img
    }

    #[test]
    fn test_encode_jpeg_magic_bytes() {
        let img = make_test_rgba(48, 64);
        let data = encode_jpeg(&img, &EncodingConfig::default()).unwrap();
        assert_eq!(data[0], 0xFF);
        assert_eq!(data[1], 0xD8);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[test]
    fn test_encode_decode_round_trip_dimensions() {
        let img = make_test_rgba(100, 60);
        let data = encode_jpeg(&img, &EncodingConfig::default()).unwrap();
        let decoded = decode_image(&data).unwrap();
        assert_eq!(decoded.width(), 100);
        assert_eq!(decoded.height(), 60);
    }
}
