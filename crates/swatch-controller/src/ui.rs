//! UI-facing state snapshot and delivery.

use serde::{Deserialize, Serialize};
use swatch_core::{DesignSystem, RecipeOutput, RecipeType};
use swatch_export::ExportArtifact;

/// Summary of one selected node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedNodeData {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub supports: Vec<String>,
    pub recipes: Vec<String>,
    /// The effective accent base color followed by the node's own overrides.
    pub design_system: DesignSystem,
}

/// Recipes of one type evaluated for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeOptions {
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    pub options: Vec<RecipeOutput>,
}

/// Everything the UI needs to render the current selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginUiState {
    pub selected_nodes: Vec<SelectedNodeData>,
    pub recipe_options: Vec<RecipeOptions>,
}

impl PluginUiState {
    /// Options listed for a recipe type, if the type applies to the selection.
    pub fn options_for(&self, recipe_type: RecipeType) -> Option<&[RecipeOutput]> {
        self.recipe_options
            .iter()
            .find(|entry| entry.recipe_type == recipe_type)
            .map(|entry| entry.options.as_slice())
    }
}

/// Sink for controller output.
pub trait PluginUi {
    /// Replace the displayed state.
    fn set_plugin_ui_state(&mut self, state: PluginUiState);

    /// Hand a finished export to the user.
    fn deliver_export(&mut self, artifact: ExportArtifact);
}

/// A [`PluginUi`] that keeps everything it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingUi {
    pub states: Vec<PluginUiState>,
    pub exports: Vec<ExportArtifact>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent snapshot.
    pub fn last_state(&self) -> Option<&PluginUiState> {
        self.states.last()
    }
}

impl PluginUi for RecordingUi {
    fn set_plugin_ui_state(&mut self, state: PluginUiState) {
        self.states.push(state);
    }

    fn deliver_export(&mut self, artifact: ExportArtifact) {
        self.exports.push(artifact);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use swatch_core::{keys, RecipeValue};

    #[test]
    fn test_snapshot_wire_shape() {
        let state = PluginUiState {
            selected_nodes: vec![SelectedNodeData {
                id: "1:2".to_string(),
                node_type: "FRAME".to_string(),
                supports: vec!["cornerRadius".to_string()],
                recipes: vec!["control".to_string()],
                design_system: DesignSystem::new().with(keys::ACCENT_BASE_COLOR, "#0078D4"),
            }],
            recipe_options: vec![RecipeOptions {
                recipe_type: RecipeType::CornerRadius,
                options: vec![RecipeOutput {
                    id: "control".to_string(),
                    name: "Control".to_string(),
                    recipe_type: RecipeType::CornerRadius,
                    value: RecipeValue::Number(2.0),
                }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "selectedNodes": [{
                    "id": "1:2",
                    "type": "FRAME",
                    "supports": ["cornerRadius"],
                    "recipes": ["control"],
                    "designSystem": {"accentBaseColor": "#0078D4"}
                }],
                "recipeOptions": [{
                    "type": "cornerRadius",
                    "options": [{"id": "control", "name": "Control", "type": "cornerRadius", "value": 2.0}]
                }]
            })
        );
        assert_eq!(state.options_for(RecipeType::CornerRadius).map(<[_]>::len), Some(1));
        assert!(state.options_for(RecipeType::StrokeFill).is_none());
    }

    #[test]
    fn test_recording_ui() {
        let mut ui = RecordingUi::new();
        assert!(ui.last_state().is_none());
        ui.set_plugin_ui_state(PluginUiState::default());
        assert_eq!(ui.states.len(), 1);
    }
}
