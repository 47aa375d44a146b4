//! Color algorithms for the Swatch engine.
//!
//! Everything in this crate is a pure function of its inputs:
//! - Contrast and luminance math
//! - Palette generation
//! - Swatch algorithms that pick palette entries from design-system parameters
//! - The [`Recipe`] type, which lets one recipe's output feed another's input

pub mod contrast;
pub mod palette;
pub mod params;
pub mod recipe;
pub mod swatches;
pub mod toggle;

pub use contrast::{contrast, relative_luminance};
pub use palette::{create_color_palette, PALETTE_SIZE};
pub use params::{default_design_system, DesignSystemParams, SwatchDeltas};
pub use recipe::Recipe;
pub use toggle::{
    neutral_foreground_toggle, neutral_foreground_toggle_large, resolve_toggle_foreground,
    ForegroundToggle, LARGE_TEXT_CONTRAST, NORMAL_TEXT_CONTRAST,
};
