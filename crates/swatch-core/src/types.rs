//! Core value types shared by recipes, nodes, and exports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ColorError;

/// An sRGB color with straight alpha, components in `0.0..=1.0`.
///
/// Serializes as an uppercase hex string (`"#0078D4"`), which is the form the
/// host stores in design-system overrides and the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create from a hex string (`"#FF5733"`, `"FF5733"`, `"#F53"` or `"#FF5733CC"`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let value = digit.to_digit(16)? as u8;
                    *slot = value * 16 + value;
                }
                Some(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ))
            }
            _ => None,
        }
    }

    /// Convert to an 8-bit RGBA tuple, rounding to the nearest step.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        )
    }

    /// Convert to hex string (e.g., "#FF5733").
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// HSL lightness in `0.0..=1.0`.
    pub fn lightness(&self) -> f32 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        (max + min) / 2.0
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| ColorError::InvalidHex {
            value: s.to_string(),
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The category a recipe belongs to. At most one recipe of each type is
/// active on a node at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeType {
    #[serde(rename = "backgroundFills")]
    BackgroundFill,
    #[serde(rename = "foregroundFills")]
    ForegroundFill,
    #[serde(rename = "strokeFills")]
    StrokeFill,
    #[serde(rename = "cornerRadius")]
    CornerRadius,
}

impl RecipeType {
    pub const ALL: [RecipeType; 4] = [
        RecipeType::BackgroundFill,
        RecipeType::ForegroundFill,
        RecipeType::StrokeFill,
        RecipeType::CornerRadius,
    ];

    /// The wire name, also used as a node capability tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::BackgroundFill => "backgroundFills",
            RecipeType::ForegroundFill => "foregroundFills",
            RecipeType::StrokeFill => "strokeFills",
            RecipeType::CornerRadius => "cornerRadius",
        }
    }

    /// Whether a change of this type alters what descendants paint on top of.
    pub fn affects_subtree(&self) -> bool {
        matches!(self, RecipeType::BackgroundFill)
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or(())
    }
}

/// The computed value of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeValue {
    Color(Color),
    Number(f64),
}

impl RecipeValue {
    /// Try to get as a color.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            RecipeValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RecipeValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// A recipe evaluated against one node's effective parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    pub value: RecipeValue,
}
