//! Node and host traits.

use swatch_core::{DesignSystem, DesignSystemValue, NodeError, RecipeOutput, RecipeType};

/// Host node type tags.
pub mod node_types {
    pub const INSTANCE: &str = "INSTANCE";
    pub const COMPONENT: &str = "COMPONENT";
    pub const FRAME: &str = "FRAME";
    pub const GROUP: &str = "GROUP";
    pub const RECTANGLE: &str = "RECTANGLE";
    pub const ELLIPSE: &str = "ELLIPSE";
    pub const VECTOR: &str = "VECTOR";
    pub const TEXT: &str = "TEXT";
}

/// Capability tags a node of the given host type supports.
pub fn default_capabilities(node_type: &str) -> Vec<String> {
    use node_types::*;

    let types: &[RecipeType] = match node_type {
        INSTANCE | COMPONENT => &[
            RecipeType::BackgroundFill,
            RecipeType::ForegroundFill,
            RecipeType::StrokeFill,
            RecipeType::CornerRadius,
        ],
        FRAME | RECTANGLE => &[
            RecipeType::BackgroundFill,
            RecipeType::StrokeFill,
            RecipeType::CornerRadius,
        ],
        ELLIPSE | VECTOR => &[RecipeType::BackgroundFill, RecipeType::StrokeFill],
        TEXT => &[RecipeType::ForegroundFill],
        _ => &[],
    };
    types.iter().map(|ty| ty.as_str().to_string()).collect()
}

/// A handle over one node of the host tree.
pub trait PluginNode {
    fn id(&self) -> &str;

    /// Host type tag, e.g. `INSTANCE` or `FRAME`.
    fn node_type(&self) -> &str;

    /// The main component's name for instances, the node's own name for
    /// components, `None` otherwise.
    fn component_name(&self) -> Option<&str>;

    fn parent(&self) -> Option<&str>;

    /// Child ids in host order.
    fn children(&self) -> &[String];

    /// Capability tags. Tags that name a recipe type make that type
    /// assignable to the node; other tags are ignored by the engine.
    fn supports(&self) -> Vec<String>;

    /// Attached recipe ids, in assignment order.
    fn recipes(&self) -> &[String];

    fn set_recipes(&mut self, recipes: Vec<String>);

    /// Parameters set explicitly on this node.
    fn design_system_overrides(&self) -> &DesignSystem;

    fn set_design_system_property(&mut self, name: &str, value: DesignSystemValue);

    fn delete_design_system_property(&mut self, name: &str);

    /// Apply a computed recipe to the node's visual properties.
    fn paint(&mut self, output: &RecipeOutput);

    /// Whether the node is a reusable component or an instance of one.
    fn is_component_like(&self) -> bool {
        matches!(self.node_type(), node_types::INSTANCE | node_types::COMPONENT)
    }
}

/// Lookup of nodes by id.
pub trait NodeHost {
    type Node: PluginNode;

    /// Returns `None` if no node by the provided id exists.
    fn get_node(&self, id: &str) -> Option<&Self::Node>;

    fn get_node_mut(&mut self, id: &str) -> Option<&mut Self::Node>;

    fn require_node(&self, id: &str) -> Result<&Self::Node, NodeError> {
        self.get_node(id).ok_or_else(|| NodeError::NotFound { id: id.to_string() })
    }

    fn require_node_mut(&mut self, id: &str) -> Result<&mut Self::Node, NodeError> {
        self.get_node_mut(id).ok_or_else(|| NodeError::NotFound { id: id.to_string() })
    }
}
