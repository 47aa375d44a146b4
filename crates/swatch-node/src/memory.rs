//! In-memory node tree.
//!
//! Mirrors the host tree closely enough to drive the engine: nodes are
//! indexed by id, keep parent and child ids, and record every paint call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swatch_core::{
    Color, ConfigError, DesignSystem, DesignSystemValue, NodeError, RecipeOutput, RecipeType,
};
use tracing::debug;

use crate::node::{default_capabilities, NodeHost, PluginNode};

/// Visual properties written by paint calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintedProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

/// A node in the in-memory tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// Explicit capability tags; `None` uses the defaults for the node type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports: Option<Vec<String>>,
    #[serde(default)]
    pub recipes: Vec<String>,
    #[serde(default)]
    pub design_system: DesignSystem,
    #[serde(default)]
    pub painted: PaintedProperties,
    /// Every paint call in order, for inspection.
    #[serde(skip)]
    pub paint_log: Vec<RecipeOutput>,
}

impl MemoryNode {
    /// Create a new node with no parent, children, recipes, or overrides.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            component_name: None,
            parent: None,
            children: Vec::new(),
            supports: None,
            recipes: Vec::new(),
            design_system: DesignSystem::new(),
            painted: PaintedProperties::default(),
            paint_log: Vec::new(),
        }
    }

    /// Set the main component name.
    pub fn with_component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    /// Replace the capability tags.
    pub fn with_supports<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supports = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set the attached recipes.
    pub fn with_recipes<I, S>(mut self, recipes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipes = recipes.into_iter().map(Into::into).collect();
        self
    }

    /// Set one override parameter.
    pub fn with_override(mut self, name: &str, value: impl Into<DesignSystemValue>) -> Self {
        self.design_system.set(name, value);
        self
    }
}

impl PluginNode for MemoryNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn children(&self) -> &[String] {
        &self.children
    }

    fn supports(&self) -> Vec<String> {
        match &self.supports {
            Some(tags) => tags.clone(),
            None => default_capabilities(&self.node_type),
        }
    }

    fn recipes(&self) -> &[String] {
        &self.recipes
    }

    fn set_recipes(&mut self, recipes: Vec<String>) {
        self.recipes = recipes;
    }

    fn design_system_overrides(&self) -> &DesignSystem {
        &self.design_system
    }

    fn set_design_system_property(&mut self, name: &str, value: DesignSystemValue) {
        self.design_system.set(name, value);
    }

    fn delete_design_system_property(&mut self, name: &str) {
        self.design_system.remove(name);
    }

    fn paint(&mut self, output: &RecipeOutput) {
        match output.recipe_type {
            RecipeType::BackgroundFill => self.painted.fill = output.value.as_color(),
            RecipeType::ForegroundFill => self.painted.text_fill = output.value.as_color(),
            RecipeType::StrokeFill => self.painted.stroke = output.value.as_color(),
            RecipeType::CornerRadius => self.painted.corner_radius = output.value.as_number(),
        }
        self.paint_log.push(output.clone());
    }
}

/// An in-memory host tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryHost {
    #[serde(default)]
    roots: Vec<String>,
    nodes: IndexMap<String, MemoryNode>,
}

impl MemoryHost {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a tree snapshot from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let host: MemoryHost = serde_json::from_str(json)?;
        for (key, node) in &host.nodes {
            if key != &node.id {
                return Err(ConfigError::Invalid {
                    reason: format!("node keyed {key:?} declares id {:?}", node.id),
                });
            }
        }
        Ok(host)
    }

    /// Serialize the tree, including painted properties, to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a root node. Returns its id.
    pub fn insert_root(&mut self, mut node: MemoryNode) -> String {
        let id = node.id.clone();
        node.parent = None;
        self.roots.push(id.clone());
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Add a child under `parent_id`, appended after existing children.
    pub fn insert_child(&mut self, parent_id: &str, mut node: MemoryNode) -> Result<String, NodeError> {
        let id = node.id.clone();
        let parent = self.nodes.get_mut(parent_id).ok_or_else(|| NodeError::NotFound {
            id: parent_id.to_string(),
        })?;
        parent.children.push(id.clone());
        node.parent = Some(parent_id.to_string());
        self.nodes.insert(id.clone(), node);
        Ok(id)
    }

    /// Drop a node from the index the way a host deletion would. Its parent
    /// keeps the stale child id and its descendants stay indexed.
    pub fn remove(&mut self, id: &str) -> Option<MemoryNode> {
        debug!(node = id, "removing node from memory host");
        self.roots.retain(|root| root != id);
        self.nodes.shift_remove(id)
    }

    /// Root node ids.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &MemoryNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear the paint logs of every node.
    pub fn clear_paint_logs(&mut self) {
        for node in self.nodes.values_mut() {
            node.paint_log.clear();
        }
    }
}

impl NodeHost for MemoryHost {
    type Node = MemoryNode;

    fn get_node(&self, id: &str) -> Option<&MemoryNode> {
        self.nodes.get(id)
    }

    fn get_node_mut(&mut self, id: &str) -> Option<&mut MemoryNode> {
        self.nodes.get_mut(id)
    }
}
