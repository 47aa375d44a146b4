//! WCAG relative luminance and contrast ratio.

use swatch_core::Color;

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, `0.0` for black through `1.0` for white.
pub fn relative_luminance(color: &Color) -> f64 {
    let r = srgb_to_linear(color.r as f64);
    let g = srgb_to_linear(color.g as f64);
    let b = srgb_to_linear(color.b as f64);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two colors, in `1.0..=21.0`. Order does not matter.
pub fn contrast(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast(&Color::BLACK, &Color::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn test_same_color_is_one() {
        let gray = Color::from_rgb8(128, 128, 128);
        assert!((contrast(&gray, &gray) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Color::from_rgb8(0x00, 0x78, 0xD4);
        let b = Color::from_rgb8(0xF0, 0xF0, 0xF0);
        assert_eq!(contrast(&a, &b), contrast(&b, &a));
    }
}
