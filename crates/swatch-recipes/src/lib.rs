//! Recipe definitions and the recipe registry.
//!
//! A recipe is a named, typed computation that produces a visual property
//! value from design-system parameters. The registry catalogs recipes by id
//! and evaluates them against a node's effective parameters.

mod catalog;
mod definition;
mod registry;

pub use catalog::{default_recipes, ids};
pub use definition::{RecipeDefinition, RecipeKind};
pub use registry::RecipeRegistry;
