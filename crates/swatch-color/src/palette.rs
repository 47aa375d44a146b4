//! Palette generation.

use swatch_core::Color;

/// Number of shades in a generated palette.
pub const PALETTE_SIZE: usize = 63;

/// Build a palette running from white (index 0) through `base` to black
/// (last index).
///
/// The base color lands at the index matching its HSL lightness, clamped so
/// both endpoints stay pure white and pure black. Shades on either side are
/// interpolated per sRGB channel.
pub fn create_color_palette(base: &Color) -> Vec<Color> {
    let base = Color { a: 1.0, ..*base };
    let last = PALETTE_SIZE - 1;
    let base_index = (((1.0 - base.lightness()) * last as f32).round() as usize).clamp(1, last - 1);

    (0..PALETTE_SIZE)
        .map(|i| {
            let shade = if i <= base_index {
                Color::WHITE.lerp(&base, i as f32 / base_index as f32)
            } else {
                base.lerp(&Color::BLACK, (i - base_index) as f32 / (last - base_index) as f32)
            };
            // Snap to 8-bit so a palette survives a trip through its hex form
            let (r, g, b, _) = shade.to_rgba8();
            Color::from_rgb8(r, g, b)
        })
        .collect()
}

/// Render a palette as uppercase hex strings, the form stored on nodes.
pub fn palette_to_hex(palette: &[Color]) -> Vec<String> {
    palette.iter().map(Color::to_hex).collect()
}

/// Parse a stored palette. Returns `None` if it is empty or any entry fails to parse.
pub fn parse_palette(entries: &[String]) -> Option<Vec<Color>> {
    if entries.is_empty() {
        return None;
    }
    entries.iter().map(|entry| Color::from_hex(entry)).collect()
}
