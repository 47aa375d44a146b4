//! Recipe registry for storing, looking up, and evaluating recipe definitions.

use indexmap::IndexMap;
use swatch_color::DesignSystemParams;
use swatch_core::{RecipeOutput, RecipeType, RegistryError, SwatchError};
use swatch_node::NodeHost;
use swatch_resolver::DesignSystemResolver;
use tracing::warn;

use crate::catalog::default_recipes;
use crate::definition::RecipeDefinition;

/// A registry of recipe definitions, keyed by id in registration order.
#[derive(Debug, Clone, Default)]
pub struct RecipeRegistry {
    recipes: IndexMap<String, RecipeDefinition>,
    resolver: DesignSystemResolver,
}

impl RecipeRegistry {
    /// Create an empty registry using the built-in default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry resolving parameters through `resolver`.
    pub fn with_resolver(resolver: DesignSystemResolver) -> Self {
        Self {
            recipes: IndexMap::new(),
            resolver,
        }
    }

    /// Create a registry holding the built-in catalog.
    pub fn with_defaults() -> Self {
        Self::with_defaults_and_resolver(DesignSystemResolver::default())
    }

    /// Create a registry holding the built-in catalog and using `resolver`.
    pub fn with_defaults_and_resolver(resolver: DesignSystemResolver) -> Self {
        let mut registry = Self::with_resolver(resolver);
        for definition in default_recipes() {
            if let Err(err) = registry.register(definition) {
                warn!(%err, "skipping built-in recipe");
            }
        }
        registry
    }

    /// Register a recipe definition.
    pub fn register(&mut self, definition: RecipeDefinition) -> Result<(), RegistryError> {
        if self.recipes.contains_key(&definition.id) {
            return Err(RegistryError::DuplicateId { id: definition.id });
        }
        self.recipes.insert(definition.id.clone(), definition);
        Ok(())
    }

    /// Get a recipe by id.
    pub fn get(&self, id: &str) -> Result<&RecipeDefinition, RegistryError> {
        self.recipes
            .get(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    /// Check if a recipe exists.
    pub fn contains(&self, id: &str) -> bool {
        self.recipes.contains_key(id)
    }

    /// All recipes of a type, in registration order.
    pub fn find(&self, recipe_type: RecipeType) -> Vec<&RecipeDefinition> {
        self.recipes
            .values()
            .filter(|definition| definition.recipe_type == recipe_type)
            .collect()
    }

    /// Recipe types with at least one registered recipe, in order of first registration.
    pub fn types(&self) -> Vec<RecipeType> {
        let mut types = Vec::new();
        for definition in self.recipes.values() {
            if !types.contains(&definition.recipe_type) {
                types.push(definition.recipe_type);
            }
        }
        types
    }

    /// Get all recipe ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The resolver used by [`RecipeRegistry::to_data`].
    pub fn resolver(&self) -> &DesignSystemResolver {
        &self.resolver
    }

    /// Evaluate a recipe against an explicit parameter set.
    pub fn evaluate(&self, id: &str, params: &DesignSystemParams) -> Result<RecipeOutput, RegistryError> {
        Ok(self.get(id)?.output(params))
    }

    /// Evaluate a recipe against a node's effective parameters.
    ///
    /// This is the single recomputation entry point for both painting and
    /// export, so identical node state always yields identical output.
    pub fn to_data<H: NodeHost>(
        &self,
        id: &str,
        host: &H,
        node_id: &str,
    ) -> Result<RecipeOutput, SwatchError> {
        let definition = self.get(id)?;
        let params = self.resolver.resolve(host, node_id)?;
        Ok(definition.output(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ids;
    use swatch_color::Recipe;
    use swatch_core::{keys, Color, NodeError, RecipeValue};
    use swatch_node::{node_types, MemoryHost, MemoryNode};

    fn constant(id: &str, recipe_type: RecipeType, color: Color) -> RecipeDefinition {
        RecipeDefinition::swatch(id, id, recipe_type, Recipe::direct(move |_| color))
    }

    #[test]
    fn test_registry_new() {
        let registry = RecipeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.types().is_empty());
    }

    #[test]
    fn test_register_duplicate_id() {
        let mut registry = RecipeRegistry::new();
        registry
            .register(constant("a", RecipeType::BackgroundFill, Color::WHITE))
            .unwrap();
        let result = registry.register(constant("a", RecipeType::StrokeFill, Color::BLACK));
        assert_eq!(result, Err(RegistryError::DuplicateId { id: "a".to_string() }));
        assert_eq!(registry.get("a").unwrap().recipe_type, RecipeType::BackgroundFill);
    }

    #[test]
    fn test_get_missing() {
        let registry = RecipeRegistry::new();
        assert!(matches!(registry.get("nope"), Err(RegistryError::NotFound { .. })));
    }

    #[test]
    fn test_find_in_registration_order() {
        let mut registry = RecipeRegistry::new();
        registry.register(constant("z", RecipeType::StrokeFill, Color::BLACK)).unwrap();
        registry.register(constant("b", RecipeType::BackgroundFill, Color::WHITE)).unwrap();
        registry.register(constant("a", RecipeType::StrokeFill, Color::WHITE)).unwrap();

        let strokes: Vec<_> = registry
            .find(RecipeType::StrokeFill)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(strokes, vec!["z", "a"]);
        assert_eq!(registry.types(), vec![RecipeType::StrokeFill, RecipeType::BackgroundFill]);
    }

    #[test]
    fn test_defaults_cover_all_types() {
        let registry = RecipeRegistry::with_defaults();
        assert_eq!(registry.types(), RecipeType::ALL.to_vec());
        assert!(registry.contains(ids::NEUTRAL_FILL_REST));
    }

    #[test]
    fn test_to_data_uses_effective_params() {
        let mut host = MemoryHost::new();
        host.insert_root(MemoryNode::new("root", node_types::FRAME).with_override(keys::CORNER_RADIUS, 7.0));
        host.insert_child("root", MemoryNode::new("child", node_types::RECTANGLE))
            .unwrap();

        let registry = RecipeRegistry::with_defaults();
        let output = registry.to_data(ids::CONTROL, &host, "child").unwrap();
        assert_eq!(output.recipe_type, RecipeType::CornerRadius);
        assert_eq!(output.value, RecipeValue::Number(7.0));
        assert_eq!(output, registry.to_data(ids::CONTROL, &host, "child").unwrap());
    }

    #[test]
    fn test_to_data_errors() {
        let mut host = MemoryHost::new();
        host.insert_root(MemoryNode::new("root", node_types::FRAME));
        let registry = RecipeRegistry::with_defaults();

        assert!(matches!(
            registry.to_data("unknown", &host, "root"),
            Err(SwatchError::Registry(RegistryError::NotFound { .. }))
        ));
        assert!(matches!(
            registry.to_data(ids::SQUARE, &host, "ghost"),
            Err(SwatchError::Node(NodeError::NotFound { .. }))
        ));
    }
}
