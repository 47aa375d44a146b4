//! Design-system parameter maps.
//!
//! A [`DesignSystem`] is an insertion-ordered map from parameter name to a
//! scalar or small-array value. Nodes carry one as their override layer; the
//! resolver merges override layers over inherited values to produce the
//! effective map a recipe is evaluated against.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Well-known parameter names, matching the keys the host stores.
pub mod keys {
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    pub const ACCENT_BASE_COLOR: &str = "accentBaseColor";
    pub const ACCENT_PALETTE: &str = "accentPalette";
    pub const NEUTRAL_PALETTE: &str = "neutralPalette";
    pub const CORNER_RADIUS: &str = "cornerRadius";
    pub const ELEVATED_CORNER_RADIUS: &str = "elevatedCornerRadius";
    pub const CONTRAST: &str = "contrast";

    pub const NEUTRAL_FILL_REST_DELTA: &str = "neutralFillRestDelta";
    pub const NEUTRAL_FILL_HOVER_DELTA: &str = "neutralFillHoverDelta";
    pub const NEUTRAL_FILL_ACTIVE_DELTA: &str = "neutralFillActiveDelta";
    pub const NEUTRAL_FILL_CARD_DELTA: &str = "neutralFillCardDelta";
    pub const NEUTRAL_LAYER_DELTA: &str = "neutralLayerDelta";
    pub const NEUTRAL_OUTLINE_REST_DELTA: &str = "neutralOutlineRestDelta";
    pub const ACCENT_FILL_REST_DELTA: &str = "accentFillRestDelta";
}

/// A single design-system parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignSystemValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl DesignSystemValue {
    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DesignSystemValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DesignSystemValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a list of strings.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DesignSystemValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<f64> for DesignSystemValue {
    fn from(n: f64) -> Self {
        DesignSystemValue::Number(n)
    }
}

impl From<&str> for DesignSystemValue {
    fn from(s: &str) -> Self {
        DesignSystemValue::Text(s.to_string())
    }
}

impl From<String> for DesignSystemValue {
    fn from(s: String) -> Self {
        DesignSystemValue::Text(s)
    }
}

impl From<Vec<String>> for DesignSystemValue {
    fn from(items: Vec<String>) -> Self {
        DesignSystemValue::List(items)
    }
}

/// An ordered map of design-system parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignSystem {
    values: IndexMap<String, DesignSystemValue>,
}

impl DesignSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, keeping its original position if it already exists.
    pub fn set(&mut self, name: &str, value: impl Into<DesignSystemValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Builder form of [`DesignSystem::set`].
    pub fn with(mut self, name: &str, value: impl Into<DesignSystemValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a parameter by name.
    pub fn get(&self, name: &str) -> Option<&DesignSystemValue> {
        self.values.get(name)
    }

    /// Remove a parameter, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<DesignSystemValue> {
        self.values.shift_remove(name)
    }

    /// Check if a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over all parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DesignSystemValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Override-wins merge: every entry of `overrides` replaces or extends
    /// `self`. Keys already present keep their position.
    pub fn merged_with(&self, overrides: &DesignSystem) -> DesignSystem {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.values.insert(name.clone(), value.clone());
        }
        merged
    }
}

impl FromIterator<(String, DesignSystemValue)> for DesignSystem {
    fn from_iter<I: IntoIterator<Item = (String, DesignSystemValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
