//! Built-in recipes.

use swatch_color::swatches::{
    accent_fill_large_rest, accent_fill_rest, accent_foreground_rest, neutral_fill_card,
    neutral_fill_input_rest, neutral_fill_rest, neutral_fill_stealth_rest,
    neutral_fill_toggle_rest, neutral_foreground_rest, neutral_layer_card,
    neutral_layer_floating, neutral_layer_l1, neutral_layer_l1_alt, neutral_layer_l2,
    neutral_layer_l3, neutral_layer_l4, neutral_outline_rest,
};
use swatch_color::{neutral_foreground_toggle, neutral_foreground_toggle_large, DesignSystemParams, Recipe};
use swatch_core::RecipeType;

use crate::definition::RecipeDefinition;

/// Built-in recipe ids.
pub mod ids {
    pub const NEUTRAL_FILL_REST: &str = "neutralFillRest";
    pub const NEUTRAL_FILL_CARD: &str = "neutralFillCard";
    pub const NEUTRAL_FILL_INPUT_REST: &str = "neutralFillInputRest";
    pub const NEUTRAL_FILL_STEALTH_REST: &str = "neutralFillStealthRest";
    pub const NEUTRAL_FILL_TOGGLE_REST: &str = "neutralFillToggleRest";
    pub const NEUTRAL_LAYER_CARD: &str = "neutralLayerCard";
    pub const NEUTRAL_LAYER_FLOATING: &str = "neutralLayerFloating";
    pub const NEUTRAL_LAYER_L1: &str = "neutralLayerL1";
    pub const NEUTRAL_LAYER_L1_ALT: &str = "neutralLayerL1Alt";
    pub const NEUTRAL_LAYER_L2: &str = "neutralLayerL2";
    pub const NEUTRAL_LAYER_L3: &str = "neutralLayerL3";
    pub const NEUTRAL_LAYER_L4: &str = "neutralLayerL4";
    pub const ACCENT_FILL_REST: &str = "accentFillRest";
    pub const ACCENT_FILL_LARGE_REST: &str = "accentFillLargeRest";

    pub const NEUTRAL_FOREGROUND_REST: &str = "neutralForegroundRest";
    pub const NEUTRAL_FOREGROUND_TOGGLE: &str = "neutralForegroundToggle";
    pub const NEUTRAL_FOREGROUND_TOGGLE_LARGE: &str = "neutralForegroundToggleLarge";
    pub const ACCENT_FOREGROUND_REST: &str = "accentForegroundRest";
    pub const ACCENT_FOREGROUND_CUT: &str = "accentForegroundCut";

    pub const NEUTRAL_OUTLINE_REST: &str = "neutralOutlineRest";

    pub const SQUARE: &str = "square";
    pub const CONTROL: &str = "control";
    pub const SURFACE: &str = "surface";
    pub const ILLUSTRATION: &str = "illustration";
    pub const ROUND: &str = "round";
}

/// Radius large enough to render any control as a pill or circle.
const ROUND_RADIUS: f64 = 9999.0;

/// The built-in catalog, in registration order.
pub fn default_recipes() -> Vec<RecipeDefinition> {
    use RecipeType::{BackgroundFill, ForegroundFill, StrokeFill};

    let fill = |id: &str, name: &str, f: fn(&DesignSystemParams) -> swatch_core::Color| {
        RecipeDefinition::swatch(id, name, BackgroundFill, Recipe::direct(f))
    };

    vec![
        fill(ids::NEUTRAL_FILL_REST, "Neutral fill", neutral_fill_rest),
        fill(ids::NEUTRAL_FILL_CARD, "Neutral fill card", neutral_fill_card),
        fill(ids::NEUTRAL_FILL_INPUT_REST, "Neutral fill input", neutral_fill_input_rest),
        fill(ids::NEUTRAL_FILL_STEALTH_REST, "Neutral fill stealth", neutral_fill_stealth_rest),
        fill(ids::NEUTRAL_FILL_TOGGLE_REST, "Neutral fill toggle", neutral_fill_toggle_rest),
        fill(ids::NEUTRAL_LAYER_CARD, "Neutral layer card", neutral_layer_card),
        fill(ids::NEUTRAL_LAYER_FLOATING, "Neutral layer floating", neutral_layer_floating),
        fill(ids::NEUTRAL_LAYER_L1, "Neutral layer L1", neutral_layer_l1),
        fill(ids::NEUTRAL_LAYER_L1_ALT, "Neutral layer L1 alt", neutral_layer_l1_alt),
        fill(ids::NEUTRAL_LAYER_L2, "Neutral layer L2", neutral_layer_l2),
        fill(ids::NEUTRAL_LAYER_L3, "Neutral layer L3", neutral_layer_l3),
        fill(ids::NEUTRAL_LAYER_L4, "Neutral layer L4", neutral_layer_l4),
        fill(ids::ACCENT_FILL_REST, "Accent fill", accent_fill_rest),
        fill(ids::ACCENT_FILL_LARGE_REST, "Accent fill large", accent_fill_large_rest),
        RecipeDefinition::swatch(
            ids::NEUTRAL_FOREGROUND_REST,
            "Neutral foreground",
            ForegroundFill,
            Recipe::direct(neutral_foreground_rest),
        ),
        RecipeDefinition::swatch(
            ids::NEUTRAL_FOREGROUND_TOGGLE,
            "Neutral foreground toggle",
            ForegroundFill,
            neutral_foreground_toggle().recipe(),
        ),
        RecipeDefinition::swatch(
            ids::NEUTRAL_FOREGROUND_TOGGLE_LARGE,
            "Neutral foreground toggle large",
            ForegroundFill,
            neutral_foreground_toggle_large().recipe(),
        ),
        RecipeDefinition::swatch(
            ids::ACCENT_FOREGROUND_REST,
            "Accent foreground",
            ForegroundFill,
            Recipe::direct(accent_foreground_rest),
        ),
        RecipeDefinition::swatch(
            ids::ACCENT_FOREGROUND_CUT,
            "Accent foreground cut",
            ForegroundFill,
            neutral_foreground_toggle().on(Recipe::direct(accent_fill_rest)),
        ),
        RecipeDefinition::swatch(
            ids::NEUTRAL_OUTLINE_REST,
            "Neutral outline",
            StrokeFill,
            Recipe::direct(neutral_outline_rest),
        ),
        RecipeDefinition::corner_radius(ids::SQUARE, "Square", Recipe::direct(|_| 0.0)),
        RecipeDefinition::corner_radius(
            ids::CONTROL,
            "Control",
            Recipe::direct(|p: &DesignSystemParams| p.corner_radius),
        ),
        RecipeDefinition::corner_radius(
            ids::SURFACE,
            "Surface",
            Recipe::direct(|p: &DesignSystemParams| p.elevated_corner_radius),
        ),
        RecipeDefinition::corner_radius(
            ids::ILLUSTRATION,
            "Illustration",
            Recipe::direct(|p: &DesignSystemParams| p.elevated_corner_radius * 2.0),
        ),
        RecipeDefinition::corner_radius(ids::ROUND, "Round", Recipe::direct(|_| ROUND_RADIUS)),
    ]
}
