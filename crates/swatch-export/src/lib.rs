//! Alias-token export for Swatch node trees.
//!
//! Walks a subtree and folds each component instance's resolved recipes into
//! a nested document keyed by category, token attribute, and style, ending
//! in `{"aliasOf": ...}` references. Category and alias tables are data
//! ([`ExportConfig`]); the bundled defaults are one example dataset.

pub mod config;
pub mod document;
mod exporter;

pub use config::{token_path, ExportConfig, TokenAttribute, TokenPath, TokenStyle};
pub use document::{deep_merge, ExportDocument};
pub use exporter::{ExportArtifact, Exporter};
