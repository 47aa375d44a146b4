//! Export tables: component categories, recipe aliases, and token paths.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_core::{ConfigError, ExportError, RecipeType};

/// Default download name for an export artifact.
pub const DEFAULT_FILE_NAME: &str = "FluentTokens.json";

/// Second level of an export path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAttribute {
    Root,
    Text,
    Alias,
}

impl TokenAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenAttribute::Root => "Root",
            TokenAttribute::Text => "Text",
            TokenAttribute::Alias => "Alias",
        }
    }
}

/// Third level of an export path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    Font,
    Fill,
    Stroke,
    Corner,
    Alias,
}

impl TokenStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStyle::Font => "Font",
            TokenStyle::Fill => "Fill",
            TokenStyle::Stroke => "Stroke",
            TokenStyle::Corner => "Corner",
            TokenStyle::Alias => "Alias",
        }
    }
}

/// Where a recipe of a given type lands below its category key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPath {
    pub attribute: TokenAttribute,
    pub style: TokenStyle,
    pub detail: Option<&'static str>,
    pub variation: Option<&'static str>,
}

impl TokenPath {
    /// Full key path for a category, leaf excluded.
    pub fn segments<'a>(&self, category: &'a str) -> Vec<&'a str> {
        let mut segments = vec![category, self.attribute.as_str(), self.style.as_str()];
        segments.extend(self.detail);
        segments.extend(self.variation);
        segments
    }
}

/// Map a recipe type to its token path.
pub fn token_path(recipe_type: RecipeType) -> TokenPath {
    match recipe_type {
        RecipeType::BackgroundFill | RecipeType::ForegroundFill | RecipeType::StrokeFill => TokenPath {
            attribute: TokenAttribute::Root,
            style: TokenStyle::Fill,
            detail: Some("Color"),
            variation: None,
        },
        RecipeType::CornerRadius => TokenPath {
            attribute: TokenAttribute::Root,
            style: TokenStyle::Corner,
            detail: None,
            variation: None,
        },
    }
}

/// Category and alias lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Main component name to export category.
    #[serde(default)]
    pub categories: IndexMap<String, String>,
    /// Recipe id to alias token.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        const ACCENT_BUTTON: &str = "AccentButton";
        const HEADER: &str = "Header";

        let categories = [
            ("01. Primary Filled / ⚪️ A. Default - Light", ACCENT_BUTTON),
            ("02. iPhone 8 / 01. Portrait / 🔵 B. Large Title + Search - Primary", HEADER),
            ("01. Primary Filled / ⚪️ B. Pressed - Light", ACCENT_BUTTON),
            ("01. Primary Filled / ⚪️ C. Disabled - Light", ACCENT_BUTTON),
            ("01. Primary / ⚪️ A. Default - Light", ACCENT_BUTTON),
            ("01. Primary / ⚪️ C. Disabled - Light", ACCENT_BUTTON),
            ("Button / State / Accent /⚡ Press", ACCENT_BUTTON),
            ("Button / State / Accent /⚡ Disabled", ACCENT_BUTTON),
        ];

        let aliases = [
            ("accentFillRest", "Set.TempAccentBkg.Fill.Color"),
            ("accentFillLargeRest", "Set.TempAccentBkg.Fill.Color"),
            ("neutralFillRest", "Global.Color.Gray.40"),
            ("neutralFillCard", "Global.Color.Gray.20"),
            ("neutralFillInputRest", "Global.Color.White"),
            ("neutralFillStealthRest", "Global.Color.White"),
            ("neutralFillToggleRest", "Global.Color.Gray.120"),
            ("neutralLayerCard", "Global.Color.White"),
            ("neutralLayerFloating", "Global.Color.White"),
            ("neutralLayerL1", "Global.Color.White"),
            ("neutralLayerL1Alt", "Global.Color.Gray.20"),
            ("neutralLayerL2", "Global.Color.Gray.40"),
            ("neutralLayerL3", "Global.Color.Gray.60"),
            ("neutralLayerL4", "Global.Color.Gray.80"),
            ("square", "Set.Square.Corner"),
            ("control", "Set.Control.Corner"),
            ("surface", "Set.Surface.Corner"),
            ("illustration", "Set.Illustration.Corner"),
            ("round", "Set.Round.Corner"),
        ];

        Self {
            categories: categories
                .into_iter()
                .map(|(name, category)| (name.to_string(), category.to_string()))
                .collect(),
            aliases: aliases
                .into_iter()
                .map(|(id, alias)| (id.to_string(), alias.to_string()))
                .collect(),
            file_name: default_file_name(),
        }
    }
}

impl ExportConfig {
    /// Parse tables from JSON. Missing tables are empty.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ExportConfig = serde_json::from_str(json)?;
        if config.file_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "fileName must not be empty".to_string(),
            });
        }
        Ok(config)
    }

    /// Load tables from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Export category for a main component name.
    pub fn category_for(&self, component_name: &str) -> Result<&str, ExportError> {
        self.categories
            .get(component_name)
            .map(String::as_str)
            .ok_or_else(|| ExportError::UnmappedCategory {
                name: component_name.to_string(),
            })
    }

    /// Alias token for a recipe id.
    pub fn alias_for(&self, recipe_id: &str) -> Result<&str, ExportError> {
        self.aliases
            .get(recipe_id)
            .map(String::as_str)
            .ok_or_else(|| ExportError::UnmappedAlias {
                id: recipe_id.to_string(),
            })
    }
}
