//! Recipe definitions.

use swatch_color::{DesignSystemParams, Recipe};
use swatch_core::{Color, RecipeOutput, RecipeType, RecipeValue};

/// The computation behind a recipe, by output shape.
#[derive(Debug, Clone)]
pub enum RecipeKind {
    /// Produces a color (fills and strokes).
    Swatch(Recipe<Color>),
    /// Produces a number (corner radius).
    Number(Recipe<f64>),
}

/// A registered recipe.
#[derive(Debug, Clone)]
pub struct RecipeDefinition {
    pub id: String,
    pub name: String,
    pub recipe_type: RecipeType,
    pub kind: RecipeKind,
}

impl RecipeDefinition {
    /// A color-producing recipe.
    pub fn swatch(
        id: impl Into<String>,
        name: impl Into<String>,
        recipe_type: RecipeType,
        recipe: Recipe<Color>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            recipe_type,
            kind: RecipeKind::Swatch(recipe),
        }
    }

    /// A corner-radius recipe.
    pub fn corner_radius(id: impl Into<String>, name: impl Into<String>, recipe: Recipe<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            recipe_type: RecipeType::CornerRadius,
            kind: RecipeKind::Number(recipe),
        }
    }

    /// Compute the recipe's value.
    pub fn evaluate(&self, params: &DesignSystemParams) -> RecipeValue {
        match &self.kind {
            RecipeKind::Swatch(recipe) => RecipeValue::Color(recipe.resolve(params)),
            RecipeKind::Number(recipe) => RecipeValue::Number(recipe.resolve(params)),
        }
    }

    /// Compute the recipe and package it with its identity.
    pub fn output(&self, params: &DesignSystemParams) -> RecipeOutput {
        RecipeOutput {
            id: self.id.clone(),
            name: self.name.clone(),
            recipe_type: self.recipe_type,
            value: self.evaluate(params),
        }
    }
}
