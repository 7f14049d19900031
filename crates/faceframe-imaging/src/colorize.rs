//! The house-style color transform.
//!
//! Every pixel is pushed through RGB -> HSV, the hue replaced with a fixed
//! constant, saturation and value curved with power functions, then mapped
//! back to RGB. The result is the uniform purple-tinted look applied to all
//! processed portraits regardless of input content.

use image::RgbaImage;

use faceframe_models::HouseStyle;

/// Convert RGB (each channel in `[0, 1]`) to HSV, all components in `[0, 1]`.
///
/// Gray pixels (max == min) report hue 0 and saturation 0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let s = (maxc - minc) / maxc;
    let rc = (maxc - r) / (maxc - minc);
    let gc = (maxc - g) / (maxc - minc);
    let bc = (maxc - b) / (maxc - minc);
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// Convert HSV (all components in `[0, 1]`) back to RGB in `[0, 1]`.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Apply the house-style transform to every pixel.
///
/// Consumes and returns the buffer; dimensions and alpha bytes are
/// untouched. Channels are scaled back with `x * 255.9999` truncated to an
/// integer; truncation, not rounding, is contractual for reproducible
/// output.
pub fn colorize(mut image: RgbaImage, style: &HouseStyle) -> RgbaImage {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let (_, s, v) = rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        let s = s.powf(style.saturation_exponent);
        let v = v.powf(style.value_exponent);
        let (r, g, b) = hsv_to_rgb(style.hue, s, v);
        pixel.0 = [
            (r * 255.9999) as u8,
            (g * 255.9999) as u8,
            (b * 255.9999) as u8,
            a,
        ];
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn single_pixel(rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba(rgba))
    }

    #[test]
    fn test_black_stays_black() {
        let out = colorize(single_pixel([0, 0, 0, 255]), &HouseStyle::default());
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_white_stays_white() {
        // Saturation of white is 0, so the fixed hue has nothing to color
        let out = colorize(single_pixel([255, 255, 255, 255]), &HouseStyle::default());
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_saturated_primaries_collapse_to_house_hue() {
        // Red, green, and blue all have s=1, v=1; once hue is replaced they
        // produce the identical purple: hsv(0.82, 1, 1) -> (235, 0, 255)
        for input in [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]] {
            let out = colorize(single_pixel(input), &HouseStyle::default());
            assert_eq!(out.get_pixel(0, 0).0, [235, 0, 255, 255]);
        }
    }

    #[test]
    fn test_alpha_passes_through() {
        for alpha in [0u8, 42, 128, 255] {
            let out = colorize(single_pixel([10, 200, 60, alpha]), &HouseStyle::default());
            assert_eq!(out.get_pixel(0, 0).0[3], alpha);
        }
    }

    #[test]
    fn test_hue_is_fixed_on_repeated_application() {
        // Colorizing twice must land on hue 0.82 both times; the transform
        // is not iterative in hue.
        let style = HouseStyle::default();
        let once = colorize(single_pixel([200, 40, 90, 255]), &style);
        let twice = colorize(once.clone(), &style);

        for img in [&once, &twice] {
            let [r, g, b, _] = img.get_pixel(0, 0).0;
            let (h, _, _) = rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
            // 8-bit quantization wobbles the recovered hue slightly
            assert!((h - 0.82).abs() < 0.01, "hue {} not near 0.82", h);
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = RgbaImage::from_pixel(17, 9, Rgba([12, 34, 56, 255]));
        let out = colorize(img, &HouseStyle::default());
        assert_eq!(out.dimensions(), (17, 9));
    }

    #[test]
    fn test_hsv_round_trip() {
        let (h, s, v) = rgb_to_hsv(0.2, 0.4, 0.6);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        assert!((r - 0.2).abs() < 1e-12);
        assert!((g - 0.4).abs() < 1e-12);
        assert!((b - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_rgb_to_hsv_gray_has_zero_saturation() {
        let (h, s, v) = rgb_to_hsv(0.5, 0.5, 0.5);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 0.5).abs() < 1e-12);
    }
}
