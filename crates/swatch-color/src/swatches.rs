//! Swatch algorithms.
//!
//! Each algorithm picks an entry from the neutral or accent palette relative
//! to the background color's position in the neutral palette. "Direction"
//! is toward more contrast: darker on a light background, lighter on a dark
//! one.

use swatch_core::Color;

use crate::contrast::{contrast, relative_luminance};
use crate::params::DesignSystemParams;
use crate::toggle::{LARGE_TEXT_CONTRAST, NORMAL_TEXT_CONTRAST};

/// Contrast target for body foreground text.
pub const NEUTRAL_FOREGROUND_CONTRAST: f64 = 14.0;

/// Backgrounds at or below this luminance are treated as dark mode.
pub fn dark_mode_luminance_threshold() -> f64 {
    (-0.1 + 0.21_f64.sqrt()) / 2.0
}

pub fn is_dark_mode(params: &DesignSystemParams) -> bool {
    relative_luminance(&params.background_color) <= dark_mode_luminance_threshold()
}

/// Index of the palette entry closest to `color` (exact match first, then
/// smallest squared RGB distance; ties resolve to the lower index).
pub fn find_closest_swatch_index(palette: &[Color], color: &Color) -> usize {
    let target = color.to_rgba8();
    if let Some(exact) = palette.iter().position(|c| c.to_rgba8() == target) {
        return exact;
    }

    let distance = |c: &Color| {
        let dr = (c.r - color.r) as f64;
        let dg = (c.g - color.g) as f64;
        let db = (c.b - color.b) as f64;
        dr * dr + dg * dg + db * db
    };

    palette
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_d), (i, c)| {
            let d = distance(c);
            if d < best_d {
                (i, d)
            } else {
                (best, best_d)
            }
        })
        .0
}

fn swatch(palette: &[Color], index: i64) -> Color {
    if palette.is_empty() {
        return Color::BLACK;
    }
    let last = palette.len() as i64 - 1;
    palette[index.clamp(0, last) as usize]
}

/// `from` moved `steps` entries in `direction`, saturating instead of
/// overflowing so out-of-range deltas clamp at the palette edge.
fn step(from: i64, direction: i64, steps: i64) -> i64 {
    from.saturating_add(direction.saturating_mul(steps))
}

fn direction(params: &DesignSystemParams) -> i64 {
    if is_dark_mode(params) {
        -1
    } else {
        1
    }
}

fn background_index(params: &DesignSystemParams) -> i64 {
    find_closest_swatch_index(&params.neutral_palette, &params.background_color) as i64
}

/// Walk from `start` in `direction` until an entry reaches `target` contrast
/// against `background`. Stops at the palette edge if nothing qualifies.
fn accessible_swatch(
    palette: &[Color],
    background: &Color,
    start: i64,
    direction: i64,
    target: f64,
) -> Color {
    if palette.is_empty() {
        return Color::BLACK;
    }
    let last = palette.len() as i64 - 1;
    let mut index = start.clamp(0, last);
    loop {
        let candidate = palette[index as usize];
        let next = index + direction;
        if contrast(&candidate, background) >= target || !(0..=last).contains(&next) {
            return candidate;
        }
        index = next;
    }
}

fn neutral_fill(params: &DesignSystemParams, delta: i64) -> Color {
    let reference = background_index(params);
    let d = &params.deltas;
    let swap_threshold = d.neutral_fill_rest.max(d.neutral_fill_hover).max(d.neutral_fill_active);
    let direction = if reference >= swap_threshold { -1 } else { 1 };
    swatch(&params.neutral_palette, step(reference, direction, delta))
}

pub fn neutral_fill_rest(params: &DesignSystemParams) -> Color {
    neutral_fill(params, params.deltas.neutral_fill_rest)
}

pub fn neutral_fill_hover(params: &DesignSystemParams) -> Color {
    neutral_fill(params, params.deltas.neutral_fill_hover)
}

pub fn neutral_fill_active(params: &DesignSystemParams) -> Color {
    neutral_fill(params, params.deltas.neutral_fill_active)
}

pub fn neutral_fill_card(params: &DesignSystemParams) -> Color {
    let reference = background_index(params);
    let delta = params.deltas.neutral_fill_card;
    let direction = if reference >= delta { -1 } else { 1 };
    swatch(&params.neutral_palette, step(reference, direction, delta))
}

/// Input fields sit directly on the background swatch.
pub fn neutral_fill_input_rest(params: &DesignSystemParams) -> Color {
    swatch(&params.neutral_palette, background_index(params))
}

/// Stealth controls are invisible at rest.
pub fn neutral_fill_stealth_rest(params: &DesignSystemParams) -> Color {
    swatch(&params.neutral_palette, background_index(params))
}

pub fn neutral_fill_toggle_rest(params: &DesignSystemParams) -> Color {
    accessible_swatch(
        &params.neutral_palette,
        &params.background_color,
        background_index(params),
        direction(params),
        NORMAL_TEXT_CONTRAST,
    )
}

pub fn neutral_layer_l1(params: &DesignSystemParams) -> Color {
    swatch(&params.neutral_palette, background_index(params))
}

pub fn neutral_layer_l1_alt(params: &DesignSystemParams) -> Color {
    let half_step = params.deltas.neutral_layer.saturating_add(1) / 2;
    swatch(
        &params.neutral_palette,
        step(background_index(params), direction(params), half_step.max(1)),
    )
}

fn neutral_layer(params: &DesignSystemParams, level: i64) -> Color {
    swatch(
        &params.neutral_palette,
        step(
            background_index(params),
            direction(params),
            params.deltas.neutral_layer.saturating_mul(level),
        ),
    )
}

pub fn neutral_layer_l2(params: &DesignSystemParams) -> Color {
    neutral_layer(params, 1)
}

pub fn neutral_layer_l3(params: &DesignSystemParams) -> Color {
    neutral_layer(params, 2)
}

pub fn neutral_layer_l4(params: &DesignSystemParams) -> Color {
    neutral_layer(params, 3)
}

/// Cards lift one card-step away from the background, toward less contrast.
pub fn neutral_layer_card(params: &DesignSystemParams) -> Color {
    swatch(
        &params.neutral_palette,
        step(background_index(params), -direction(params), params.deltas.neutral_fill_card),
    )
}

pub fn neutral_layer_floating(params: &DesignSystemParams) -> Color {
    neutral_layer_card(params)
}

pub fn neutral_foreground_rest(params: &DesignSystemParams) -> Color {
    accessible_swatch(
        &params.neutral_palette,
        &params.background_color,
        background_index(params),
        direction(params),
        NEUTRAL_FOREGROUND_CONTRAST,
    )
}

pub fn neutral_outline_rest(params: &DesignSystemParams) -> Color {
    swatch(
        &params.neutral_palette,
        step(background_index(params), direction(params), params.deltas.neutral_outline_rest),
    )
}

fn accent_fill(params: &DesignSystemParams, target: f64) -> Color {
    let accent_index =
        find_closest_swatch_index(&params.accent_palette, &params.accent_base_color) as i64;
    let direction = direction(params);
    accessible_swatch(
        &params.accent_palette,
        &params.background_color,
        step(accent_index, direction, params.deltas.accent_fill_rest),
        direction,
        target,
    )
}

/// Accent fill dark enough for normal text cut out of it.
pub fn accent_fill_rest(params: &DesignSystemParams) -> Color {
    accent_fill(params, NORMAL_TEXT_CONTRAST)
}

/// Accent fill for large text, which may sit closer to the background.
pub fn accent_fill_large_rest(params: &DesignSystemParams) -> Color {
    accent_fill(params, LARGE_TEXT_CONTRAST)
}

pub fn accent_foreground_rest(params: &DesignSystemParams) -> Color {
    let accent_index =
        find_closest_swatch_index(&params.accent_palette, &params.accent_base_color) as i64;
    accessible_swatch(
        &params.accent_palette,
        &params.background_color,
        accent_index,
        direction(params),
        NORMAL_TEXT_CONTRAST,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SwatchDeltas;
    use proptest::prelude::*;

    fn dark_params() -> DesignSystemParams {
        DesignSystemParams {
            background_color: Color::from_rgb8(0x1F, 0x1F, 0x1F),
            ..DesignSystemParams::default()
        }
    }

    #[test]
    fn test_dark_mode_detection() {
        assert!(!is_dark_mode(&DesignSystemParams::default()));
        assert!(is_dark_mode(&dark_params()));
    }

    #[test]
    fn test_closest_index_exact_match() {
        let palette = DesignSystemParams::default().neutral_palette;
        assert_eq!(find_closest_swatch_index(&palette, &Color::WHITE), 0);
        assert_eq!(find_closest_swatch_index(&palette, &Color::BLACK), palette.len() - 1);
    }

    #[test]
    fn test_neutral_fill_rest_darker_on_light() {
        let params = DesignSystemParams::default();
        let fill = neutral_fill_rest(&params);
        assert_eq!(fill, params.neutral_palette[7]);
        assert!(relative_luminance(&fill) < relative_luminance(&params.background_color));
    }

    #[test]
    fn test_neutral_fill_rest_lighter_on_dark() {
        let params = dark_params();
        let fill = neutral_fill_rest(&params);
        assert!(relative_luminance(&fill) > relative_luminance(&params.background_color));
    }

    #[test]
    fn test_layers_step_away_from_background() {
        let params = DesignSystemParams::default();
        let l2 = relative_luminance(&neutral_layer_l2(&params));
        let l3 = relative_luminance(&neutral_layer_l3(&params));
        let l4 = relative_luminance(&neutral_layer_l4(&params));
        assert!(l2 > l3 && l3 > l4);
        assert_eq!(neutral_layer_l1(&params), Color::WHITE);
        assert_eq!(neutral_layer_card(&params), Color::WHITE);
    }

    #[test]
    fn test_foreground_rest_meets_contrast() {
        let params = DesignSystemParams::default();
        let fg = neutral_foreground_rest(&params);
        assert!(contrast(&fg, &params.background_color) >= NEUTRAL_FOREGROUND_CONTRAST);
    }

    #[test]
    fn test_accent_fill_rest_meets_contrast() {
        let params = DesignSystemParams::default();
        let fill = accent_fill_rest(&params);
        assert!(contrast(&fill, &params.background_color) >= NORMAL_TEXT_CONTRAST);
        let large = accent_fill_large_rest(&params);
        assert!(contrast(&large, &params.background_color) >= LARGE_TEXT_CONTRAST);
    }

    #[test]
    fn test_empty_palette_does_not_panic() {
        let params = DesignSystemParams {
            neutral_palette: Vec::new(),
            ..DesignSystemParams::default()
        };
        assert_eq!(neutral_fill_rest(&params), Color::BLACK);
        assert_eq!(neutral_fill_toggle_rest(&params), Color::BLACK);
    }

    #[test]
    fn test_extreme_deltas_clamp_to_palette_edge() {
        let params = DesignSystemParams {
            deltas: SwatchDeltas {
                neutral_fill_rest: i64::MAX,
                neutral_fill_hover: i64::MAX,
                neutral_fill_active: i64::MAX,
                neutral_fill_card: i64::MIN,
                neutral_layer: i64::MAX,
                neutral_outline_rest: i64::MIN,
                accent_fill_rest: i64::MAX,
            },
            ..DesignSystemParams::default()
        };
        let last = *params.neutral_palette.last().unwrap();
        assert_eq!(neutral_layer_l4(&params), last);
        assert_eq!(neutral_layer_l1_alt(&params), last);
        assert_eq!(neutral_fill_rest(&params), last);
        assert_eq!(neutral_outline_rest(&params), Color::WHITE);
        neutral_fill_card(&params);
        neutral_layer_card(&params);
        accent_fill_rest(&params);
    }

    proptest! {
        #[test]
        fn prop_toggle_fill_reaches_contrast(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let params = DesignSystemParams {
                background_color: Color::from_rgb8(r, g, b),
                ..DesignSystemParams::default()
            };
            let fill = neutral_fill_toggle_rest(&params);
            // Either the target is met or the walk reached a palette endpoint
            let at_edge = fill == Color::WHITE || fill == Color::BLACK;
            prop_assert!(at_edge || contrast(&fill, &params.background_color) >= NORMAL_TEXT_CONTRAST);
        }
    }
}
