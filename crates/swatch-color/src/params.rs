//! Typed view over an effective design-system map.

use swatch_core::{keys, Color, DesignSystem, DesignSystemValue};
use tracing::warn;

use crate::palette::{create_color_palette, palette_to_hex, parse_palette, PALETTE_SIZE};

pub const DEFAULT_BACKGROUND_COLOR: Color = Color::WHITE;
pub const DEFAULT_ACCENT_BASE_COLOR: &str = "#0078D4";
pub const DEFAULT_NEUTRAL_BASE_COLOR: &str = "#808080";
pub const DEFAULT_CORNER_RADIUS: f64 = 2.0;
pub const DEFAULT_ELEVATED_CORNER_RADIUS: f64 = 4.0;

/// Largest swatch delta magnitude; anything further only reaches a palette endpoint.
pub const MAX_SWATCH_DELTA: i64 = PALETTE_SIZE as i64;

/// Palette index offsets used by the swatch algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchDeltas {
    pub neutral_fill_rest: i64,
    pub neutral_fill_hover: i64,
    pub neutral_fill_active: i64,
    pub neutral_fill_card: i64,
    pub neutral_layer: i64,
    pub neutral_outline_rest: i64,
    pub accent_fill_rest: i64,
}

impl Default for SwatchDeltas {
    fn default() -> Self {
        Self {
            neutral_fill_rest: 7,
            neutral_fill_hover: 10,
            neutral_fill_active: 5,
            neutral_fill_card: 3,
            neutral_layer: 3,
            neutral_outline_rest: 25,
            accent_fill_rest: 0,
        }
    }
}

/// The parameters recipes are computed from.
///
/// Built from an effective [`DesignSystem`] map; entries that are missing or
/// fail to parse fall back to the defaults, so computing a recipe never fails
/// on bad parameter data.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSystemParams {
    pub background_color: Color,
    pub accent_base_color: Color,
    pub accent_palette: Vec<Color>,
    pub neutral_palette: Vec<Color>,
    pub corner_radius: f64,
    pub elevated_corner_radius: f64,
    pub contrast: f64,
    pub deltas: SwatchDeltas,
}

impl Default for DesignSystemParams {
    fn default() -> Self {
        let accent_base_color = default_accent_base_color();
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR,
            accent_base_color,
            accent_palette: create_color_palette(&accent_base_color),
            neutral_palette: default_neutral_palette(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            elevated_corner_radius: DEFAULT_ELEVATED_CORNER_RADIUS,
            contrast: 0.0,
            deltas: SwatchDeltas::default(),
        }
    }
}

impl DesignSystemParams {
    /// Read typed parameters from an effective design-system map.
    ///
    /// Default palettes are only generated for entries the map lacks.
    pub fn from_design_system(ds: &DesignSystem) -> Self {
        let d = SwatchDeltas::default();

        Self {
            background_color: color_param(ds, keys::BACKGROUND_COLOR, DEFAULT_BACKGROUND_COLOR),
            accent_base_color: color_param(ds, keys::ACCENT_BASE_COLOR, default_accent_base_color()),
            accent_palette: palette_param(ds, keys::ACCENT_PALETTE, || {
                create_color_palette(&default_accent_base_color())
            }),
            neutral_palette: palette_param(ds, keys::NEUTRAL_PALETTE, default_neutral_palette),
            corner_radius: number_param(ds, keys::CORNER_RADIUS, DEFAULT_CORNER_RADIUS),
            elevated_corner_radius: number_param(
                ds,
                keys::ELEVATED_CORNER_RADIUS,
                DEFAULT_ELEVATED_CORNER_RADIUS,
            ),
            contrast: number_param(ds, keys::CONTRAST, 0.0),
            deltas: SwatchDeltas {
                neutral_fill_rest: delta_param(ds, keys::NEUTRAL_FILL_REST_DELTA, d.neutral_fill_rest),
                neutral_fill_hover: delta_param(ds, keys::NEUTRAL_FILL_HOVER_DELTA, d.neutral_fill_hover),
                neutral_fill_active: delta_param(ds, keys::NEUTRAL_FILL_ACTIVE_DELTA, d.neutral_fill_active),
                neutral_fill_card: delta_param(ds, keys::NEUTRAL_FILL_CARD_DELTA, d.neutral_fill_card),
                neutral_layer: delta_param(ds, keys::NEUTRAL_LAYER_DELTA, d.neutral_layer),
                neutral_outline_rest: delta_param(
                    ds,
                    keys::NEUTRAL_OUTLINE_REST_DELTA,
                    d.neutral_outline_rest,
                ),
                accent_fill_rest: delta_param(ds, keys::ACCENT_FILL_REST_DELTA, d.accent_fill_rest),
            },
        }
    }
}

/// The process-wide default parameter set in map form. This is the root of
/// every node's inheritance chain.
pub fn default_design_system() -> DesignSystem {
    let params = DesignSystemParams::default();
    let d = params.deltas;
    DesignSystem::new()
        .with(keys::BACKGROUND_COLOR, params.background_color.to_hex())
        .with(keys::ACCENT_BASE_COLOR, params.accent_base_color.to_hex())
        .with(keys::ACCENT_PALETTE, palette_to_hex(&params.accent_palette))
        .with(keys::NEUTRAL_PALETTE, palette_to_hex(&params.neutral_palette))
        .with(keys::CORNER_RADIUS, params.corner_radius)
        .with(keys::ELEVATED_CORNER_RADIUS, params.elevated_corner_radius)
        .with(keys::CONTRAST, params.contrast)
        .with(keys::NEUTRAL_FILL_REST_DELTA, d.neutral_fill_rest as f64)
        .with(keys::NEUTRAL_FILL_HOVER_DELTA, d.neutral_fill_hover as f64)
        .with(keys::NEUTRAL_FILL_ACTIVE_DELTA, d.neutral_fill_active as f64)
        .with(keys::NEUTRAL_FILL_CARD_DELTA, d.neutral_fill_card as f64)
        .with(keys::NEUTRAL_LAYER_DELTA, d.neutral_layer as f64)
        .with(keys::NEUTRAL_OUTLINE_REST_DELTA, d.neutral_outline_rest as f64)
        .with(keys::ACCENT_FILL_REST_DELTA, d.accent_fill_rest as f64)
}

fn default_accent_base_color() -> Color {
    Color::from_hex(DEFAULT_ACCENT_BASE_COLOR).unwrap_or(Color::BLACK)
}

fn default_neutral_palette() -> Vec<Color> {
    create_color_palette(&Color::from_hex(DEFAULT_NEUTRAL_BASE_COLOR).unwrap_or(Color::BLACK))
}

fn color_param(ds: &DesignSystem, key: &str, fallback: Color) -> Color {
    match ds.get(key) {
        None => fallback,
        Some(value) => match value.as_str().and_then(Color::from_hex) {
            Some(color) => color,
            None => {
                warn!(parameter = key, ?value, "unparsable color parameter, using default");
                fallback
            }
        },
    }
}

fn palette_param(
    ds: &DesignSystem,
    key: &str,
    fallback: impl FnOnce() -> Vec<Color>,
) -> Vec<Color> {
    match ds.get(key) {
        None => fallback(),
        Some(value) => match value.as_list().and_then(parse_palette) {
            Some(palette) => palette,
            None => {
                warn!(parameter = key, "unparsable palette parameter, using default");
                fallback()
            }
        },
    }
}

fn number_param(ds: &DesignSystem, key: &str, fallback: f64) -> f64 {
    match ds.get(key) {
        None => fallback,
        Some(DesignSystemValue::Number(n)) if n.is_finite() => *n,
        Some(value) => {
            warn!(parameter = key, ?value, "non-numeric parameter, using default");
            fallback
        }
    }
}

fn delta_param(ds: &DesignSystem, key: &str, fallback: i64) -> i64 {
    let delta = number_param(ds, key, fallback as f64).round();
    let max = MAX_SWATCH_DELTA as f64;
    if delta.abs() > max {
        warn!(parameter = key, delta, "swatch delta out of range, clamping");
    }
    delta.clamp(-max, max) as i64
}
