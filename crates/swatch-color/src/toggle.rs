//! Foreground selection for toggle-style fills.

use swatch_core::Color;

use crate::contrast::contrast;
use crate::recipe::Recipe;
use crate::swatches::neutral_fill_toggle_rest;

/// Minimum contrast for normal text (under 18pt, or 14pt bold).
pub const NORMAL_TEXT_CONTRAST: f64 = 4.5;

/// Minimum contrast for large text.
pub const LARGE_TEXT_CONTRAST: f64 = 3.0;

/// Pick white or black as the foreground for `background`.
///
/// White wins whenever it reaches `target_contrast`; otherwise black if it
/// does. When neither endpoint qualifies the higher-contrast one is
/// returned, with white winning ties.
pub fn resolve_toggle_foreground(background: &Color, target_contrast: f64) -> Color {
    let on_white = contrast(&Color::WHITE, background);
    if on_white >= target_contrast {
        return Color::WHITE;
    }
    let on_black = contrast(&Color::BLACK, background);
    if on_black >= target_contrast || on_black > on_white {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// A toggle-foreground recipe factory bound to a contrast threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForegroundToggle {
    target_contrast: f64,
}

impl ForegroundToggle {
    pub const fn new(target_contrast: f64) -> Self {
        Self { target_contrast }
    }

    pub fn target_contrast(&self) -> f64 {
        self.target_contrast
    }

    /// Direct form, evaluated against the neutral toggle fill.
    pub fn recipe(&self) -> Recipe<Color> {
        let target = self.target_contrast;
        Recipe::direct(move |params| resolve_toggle_foreground(&neutral_fill_toggle_rest(params), target))
    }

    /// Composed form, evaluated against whatever `background` resolves to.
    pub fn on(&self, background: Recipe<Color>) -> Recipe<Color> {
        let target = self.target_contrast;
        Recipe::composed(background, move |bg, _| resolve_toggle_foreground(&bg, target))
    }
}

/// Toggle text for normal sized text.
pub const fn neutral_foreground_toggle() -> ForegroundToggle {
    ForegroundToggle::new(NORMAL_TEXT_CONTRAST)
}

/// Toggle text for large text (over 18pt, or 14pt bold).
pub const fn neutral_foreground_toggle_large() -> ForegroundToggle {
    ForegroundToggle::new(LARGE_TEXT_CONTRAST)
}
