//! Error types for the Swatch engine.

use thiserror::Error;

/// Top-level error type for the Swatch engine.
#[derive(Debug, Error)]
pub enum SwatchError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors parsing color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {value:?}")]
    InvalidHex { value: String },
}

/// Errors from the recipe registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Recipe not found: {id}")]
    NotFound { id: String },

    #[error("Recipe id already registered: {id}")]
    DuplicateId { id: String },
}

/// Errors looking up nodes in the host tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("Node not found: {id}")]
    NotFound { id: String },

    #[error("Circular parent chain: {}", .cycle.join(" -> "))]
    ParentCycle { cycle: Vec<String> },
}

/// Errors while building an export document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No category mapped for component {name:?}")]
    UnmappedCategory { name: String },

    #[error("No alias mapped for recipe {id:?}")]
    UnmappedAlias { id: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Errors loading configuration data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}
