//! Core types, design-system parameter maps, and errors for the Swatch recipe engine.
//!
//! This crate provides the foundational types used across all other swatch crates:
//! - Value types (colors, recipe types, recipe outputs)
//! - Design-system parameter maps
//! - Error types

pub mod design_system;
pub mod errors;
pub mod types;

pub use design_system::*;
pub use errors::*;
pub use types::*;
