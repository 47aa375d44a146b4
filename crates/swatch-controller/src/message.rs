//! Inbound UI messages.

use serde::{Deserialize, Serialize};
use swatch_core::{DesignSystemValue, RecipeType};

/// A command from the UI, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiMessage {
    Recipe(RecipeMessage),
    DesignSystem(DesignSystemMessage),
    Reset(NodeTargets),
    Sync(NodeTargets),
    Export(NodeTargets),
    /// Any `type` this engine does not know.
    #[serde(other)]
    Unknown,
}

impl UiMessage {
    pub fn assign_recipe<I, S>(id: impl Into<String>, node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::Recipe(RecipeMessage::Assign {
            id: id.into(),
            node_ids: collect_ids(node_ids),
        })
    }

    pub fn remove_recipe<I, S>(recipe_type: RecipeType, node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::Recipe(RecipeMessage::Delete {
            recipe_type,
            node_ids: collect_ids(node_ids),
        })
    }

    pub fn set_design_system<I, S>(
        property: impl Into<String>,
        value: impl Into<DesignSystemValue>,
        node_ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::DesignSystem(DesignSystemMessage {
            action: DesignSystemAction::Assign,
            property: property.into(),
            value: Some(value.into()),
            node_ids: collect_ids(node_ids),
        })
    }

    pub fn delete_design_system<I, S>(property: impl Into<String>, node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::DesignSystem(DesignSystemMessage {
            action: DesignSystemAction::Delete,
            property: property.into(),
            value: None,
            node_ids: collect_ids(node_ids),
        })
    }

    pub fn reset<I, S>(node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::Reset(NodeTargets::new(node_ids))
    }

    pub fn sync<I, S>(node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::Sync(NodeTargets::new(node_ids))
    }

    pub fn export<I, S>(node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UiMessage::Export(NodeTargets::new(node_ids))
    }

    /// Parse one message from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            UiMessage::Recipe(RecipeMessage::Assign { .. }) => "recipe/assign",
            UiMessage::Recipe(RecipeMessage::Delete { .. }) => "recipe/delete",
            UiMessage::DesignSystem(msg) => match msg.action {
                DesignSystemAction::Assign => "designSystem/assign",
                DesignSystemAction::Delete => "designSystem/delete",
            },
            UiMessage::Reset(_) => "reset",
            UiMessage::Sync(_) => "sync",
            UiMessage::Export(_) => "export",
            UiMessage::Unknown => "unknown",
        }
    }
}

fn collect_ids<I, S>(node_ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    node_ids.into_iter().map(Into::into).collect()
}

/// Node ids a command applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTargets {
    #[serde(default)]
    pub node_ids: Vec<String>,
}

impl NodeTargets {
    pub fn new<I, S>(node_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            node_ids: collect_ids(node_ids),
        }
    }
}

/// Recipe commands, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RecipeMessage {
    /// Attach a recipe, replacing any recipe of the same type.
    Assign {
        id: String,
        #[serde(rename = "nodeIds", default)]
        node_ids: Vec<String>,
    },
    /// Detach every recipe of a type.
    Delete {
        #[serde(rename = "recipeType")]
        recipe_type: RecipeType,
        #[serde(rename = "nodeIds", default)]
        node_ids: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DesignSystemAction {
    Assign,
    Delete,
}

/// Set or clear one override parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemMessage {
    pub action: DesignSystemAction,
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DesignSystemValue>,
    #[serde(default)]
    pub node_ids: Vec<String>,
}
