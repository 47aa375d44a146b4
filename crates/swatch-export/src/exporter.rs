//! Subtree walk producing export documents.

use std::collections::HashSet;

use serde_json::{json, Value};
use swatch_core::{keys, DesignSystemValue, ExportError};
use swatch_node::{NodeHost, PluginNode};
use swatch_recipes::RecipeRegistry;
use tracing::{debug, warn};

use crate::config::{token_path, ExportConfig};
use crate::document::ExportDocument;

/// A finished export, ready to hand to the UI for download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub document: ExportDocument,
}

impl ExportArtifact {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        self.document.to_json_pretty()
    }
}

/// Builds export documents from node subtrees.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Full document for one node: the global accent ramp entry followed by
    /// the subtree's tokens.
    pub fn export_document<H: NodeHost>(
        &self,
        host: &H,
        registry: &RecipeRegistry,
        node_id: &str,
    ) -> Result<ExportDocument, ExportError> {
        let effective = registry.resolver().effective(host, node_id)?;
        let ramp_from = effective
            .get(keys::ACCENT_BASE_COLOR)
            .map(design_system_value_to_json)
            .unwrap_or(Value::Null);

        let mut document = ExportDocument::from_path(
            &["Global", "Color", "Accent", "buildRampFrom"],
            ramp_from,
        );
        document.merge(self.export_subtree(host, registry, node_id)?);
        Ok(document)
    }

    /// [`Exporter::export_document`] wrapped with the configured file name.
    pub fn export_artifact<H: NodeHost>(
        &self,
        host: &H,
        registry: &RecipeRegistry,
        node_id: &str,
    ) -> Result<ExportArtifact, ExportError> {
        Ok(ExportArtifact {
            file_name: self.config.file_name.clone(),
            document: self.export_document(host, registry, node_id)?,
        })
    }

    /// Tokens contributed by a subtree.
    ///
    /// Component-like nodes contribute their own recipes under their
    /// category and stop the walk; any other node merges its children's
    /// contributions in order. A node reached twice in one walk contributes
    /// nothing the second time.
    pub fn export_subtree<H: NodeHost>(
        &self,
        host: &H,
        registry: &RecipeRegistry,
        node_id: &str,
    ) -> Result<ExportDocument, ExportError> {
        self.walk(host, registry, node_id, &mut HashSet::new())
    }

    fn walk<H: NodeHost>(
        &self,
        host: &H,
        registry: &RecipeRegistry,
        node_id: &str,
        visited: &mut HashSet<String>,
    ) -> Result<ExportDocument, ExportError> {
        let node = host.require_node(node_id)?;
        if !visited.insert(node_id.to_string()) {
            warn!(node = %node_id, "node reached twice while exporting, skipping");
            return Ok(ExportDocument::new());
        }

        if node.is_component_like() {
            return Ok(self.export_component(host, registry, node));
        }

        let mut document = ExportDocument::new();
        for child_id in node.children() {
            match self.walk(host, registry, child_id, visited) {
                Ok(contribution) => document.merge(contribution),
                Err(err) => warn!(node = %child_id, %err, "skipping child during export"),
            }
        }
        Ok(document)
    }

    fn export_component<H: NodeHost>(
        &self,
        host: &H,
        registry: &RecipeRegistry,
        node: &H::Node,
    ) -> ExportDocument {
        let mut document = ExportDocument::new();
        let name = node.component_name().unwrap_or_default();

        let category = match self.config.category_for(name) {
            Ok(category) => category,
            Err(err) => {
                warn!(node = node.id(), %err, "component not exported");
                return document;
            }
        };

        for recipe_id in node.recipes() {
            let output = match registry.to_data(recipe_id, host, node.id()) {
                Ok(output) => output,
                Err(err) => {
                    warn!(node = node.id(), recipe = %recipe_id, %err, "skipping recipe during export");
                    continue;
                }
            };
            let alias = match self.config.alias_for(recipe_id) {
                Ok(alias) => alias,
                Err(err) => {
                    warn!(node = node.id(), %err, "skipping recipe during export");
                    continue;
                }
            };

            let path = token_path(output.recipe_type).segments(category);
            debug!(node = node.id(), recipe = %recipe_id, path = ?path, "exporting alias");
            document.merge(ExportDocument::from_path(path.as_slice(), json!({ "aliasOf": alias })));
        }

        document
    }
}

fn design_system_value_to_json(value: &DesignSystemValue) -> Value {
    match value {
        DesignSystemValue::Number(n) => json!(n),
        DesignSystemValue::Text(s) => Value::String(s.clone()),
        DesignSystemValue::List(items) => json!(items),
    }
}
