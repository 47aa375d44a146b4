//! Command handling for the Swatch engine.
//!
//! The [`Controller`] owns the host tree, the UI sink, and the editing
//! [`Session`]. It interprets [`UiMessage`]s one at a time: mutate recipe
//! lists or overrides, repaint the affected subtrees, then publish a fresh
//! [`PluginUiState`].

mod controller;
pub mod message;
mod session;
pub mod ui;

pub use controller::Controller;
pub use message::{DesignSystemAction, DesignSystemMessage, NodeTargets, RecipeMessage, UiMessage};
pub use session::Session;
pub use ui::{PluginUi, PluginUiState, RecipeOptions, RecordingUi, SelectedNodeData};
