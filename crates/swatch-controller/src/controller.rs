//! The command interpreter.

use std::collections::HashSet;
use std::sync::mpsc::Receiver;

use swatch_color::palette::{create_color_palette, palette_to_hex};
use swatch_core::{keys, Color, DesignSystem, DesignSystemValue, RecipeOutput, RecipeType};
use swatch_export::Exporter;
use swatch_node::{NodeHost, PluginNode};
use swatch_recipes::RecipeRegistry;
use tracing::{debug, warn};

use crate::message::{DesignSystemAction, DesignSystemMessage, RecipeMessage, UiMessage};
use crate::session::Session;
use crate::ui::{PluginUi, PluginUiState, RecipeOptions, SelectedNodeData};

/// Applies UI commands to a host tree and keeps the UI in sync.
///
/// Commands run to completion one at a time. Per-node failures (a missing
/// node, an unknown recipe id) are logged and skipped; no command aborts
/// part way through its targets.
pub struct Controller<H: NodeHost, U: PluginUi> {
    host: H,
    ui: U,
    registry: RecipeRegistry,
    exporter: Exporter,
    session: Session,
}

impl<H: NodeHost, U: PluginUi> Controller<H, U> {
    /// Create a controller with the built-in recipe catalog and export tables.
    pub fn new(host: H, ui: U) -> Self {
        Self {
            host,
            ui,
            registry: RecipeRegistry::with_defaults(),
            exporter: Exporter::default(),
            session: Session::new(),
        }
    }

    pub fn with_registry(mut self, registry: RecipeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_exporter(mut self, exporter: Exporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Direct access to the tree, for host-side edits between commands.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn registry(&self) -> &RecipeRegistry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (H, U) {
        (self.host, self.ui)
    }

    pub fn selected_nodes(&self) -> &[String] {
        self.session.selection()
    }

    /// Replace the selection and publish a fresh snapshot.
    pub fn set_selected_nodes<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.session.select(ids);
        self.refresh_ui();
    }

    /// Build the snapshot for the current selection.
    pub fn plugin_ui_state(&self) -> PluginUiState {
        let selected: Vec<&H::Node> = self
            .session
            .selection()
            .iter()
            .filter_map(|id| self.host.get_node(id))
            .collect();

        let Some(first) = selected.first() else {
            return PluginUiState::default();
        };

        let mut supported: Vec<String> = Vec::new();
        for node in &selected {
            for tag in node.supports() {
                if !supported.contains(&tag) {
                    supported.push(tag);
                }
            }
        }

        let known = self.registry.types();
        let recipe_options = supported
            .iter()
            .filter_map(|tag| tag.parse::<RecipeType>().ok())
            .filter(|recipe_type| known.contains(recipe_type))
            .map(|recipe_type| RecipeOptions {
                recipe_type,
                options: self
                    .registry
                    .find(recipe_type)
                    .into_iter()
                    .filter_map(|definition| self.compute(&definition.id, first.id()))
                    .collect(),
            })
            .collect();

        PluginUiState {
            selected_nodes: selected.iter().map(|node| self.summarize(*node)).collect(),
            recipe_options,
        }
    }

    /// Process one command.
    pub fn handle_message(&mut self, message: UiMessage) {
        debug!(kind = message.kind(), "handling message");

        match message {
            UiMessage::Recipe(RecipeMessage::Assign { id, node_ids }) => {
                self.assign_recipe(&id, &node_ids);
            }
            UiMessage::Recipe(RecipeMessage::Delete { recipe_type, node_ids }) => {
                self.remove_recipe(recipe_type, &node_ids);
            }
            UiMessage::DesignSystem(message) => self.handle_design_system(message),
            UiMessage::Reset(targets) => self.reset(&targets.node_ids),
            UiMessage::Sync(targets) => {
                for id in &targets.node_ids {
                    self.paint_tree(id);
                }
                self.refresh_ui();
            }
            UiMessage::Export(targets) => self.export(&targets.node_ids),
            UiMessage::Unknown => debug!("ignoring unknown message type"),
        }
    }

    /// Handle messages from a channel until every sender is dropped.
    /// Returns the number of messages processed.
    pub fn run(&mut self, receiver: Receiver<UiMessage>) -> usize {
        let mut processed = 0;
        for message in receiver {
            self.handle_message(message);
            processed += 1;
        }
        debug!(processed, "message channel closed");
        processed
    }

    /// Recompute and paint every recipe on a node and its descendants,
    /// parents before children, children in host order.
    pub fn paint_tree(&mut self, id: &str) {
        let mut stack = vec![id.to_string()];
        let mut visited = HashSet::new();

        while let Some(node_id) = stack.pop() {
            if !visited.insert(node_id.clone()) {
                warn!(node = %node_id, "node reached twice while painting, skipping");
                continue;
            }

            let Some(node) = self.host.get_node(&node_id) else {
                warn!(node = %node_id, "node not found, skipping paint");
                continue;
            };
            let recipes = node.recipes().to_vec();
            stack.extend(node.children().iter().rev().cloned());

            let outputs: Vec<RecipeOutput> = recipes
                .iter()
                .filter_map(|recipe_id| self.compute(recipe_id, &node_id))
                .collect();
            self.paint(&node_id, &outputs);
        }
    }

    fn assign_recipe(&mut self, id: &str, node_ids: &[String]) {
        let recipe_type = match self.registry.get(id) {
            Ok(definition) => definition.recipe_type,
            Err(err) => {
                warn!(%err, "cannot assign recipe");
                self.refresh_ui();
                return;
            }
        };

        for node_id in node_ids {
            let recipes = match self.host.get_node(node_id) {
                Some(node) => self.replace_recipe_of_type(node.recipes(), recipe_type, id),
                None => {
                    warn!(node = %node_id, "node not found, skipping recipe assignment");
                    continue;
                }
            };
            if let Some(node) = self.host.get_node_mut(node_id) {
                node.set_recipes(recipes);
            }

            if recipe_type.affects_subtree() {
                self.paint_tree(node_id);
            } else if let Some(output) = self.compute(id, node_id) {
                self.paint(node_id, &[output]);
            }
        }

        self.refresh_ui();
    }

    fn remove_recipe(&mut self, recipe_type: RecipeType, node_ids: &[String]) {
        for node_id in node_ids {
            let Some(node) = self.host.get_node(node_id) else {
                warn!(node = %node_id, "node not found, skipping recipe removal");
                continue;
            };
            let recipes: Vec<String> = node
                .recipes()
                .iter()
                .filter(|recipe_id| self.recipe_type_of(recipe_id) != Some(recipe_type))
                .cloned()
                .collect();
            if let Some(node) = self.host.get_node_mut(node_id) {
                node.set_recipes(recipes);
            }
            if recipe_type.affects_subtree() {
                self.paint_tree(node_id);
            }
        }

        self.refresh_ui();
    }

    fn handle_design_system(&mut self, message: DesignSystemMessage) {
        let DesignSystemMessage {
            action,
            property,
            value,
            node_ids,
        } = message;

        let targets: Vec<String> = node_ids
            .into_iter()
            .filter(|node_id| {
                let exists = self.host.get_node(node_id).is_some();
                if !exists {
                    warn!(node = %node_id, "node not found, skipping design system change");
                }
                exists
            })
            .collect();

        match action {
            DesignSystemAction::Assign => {
                let Some(value) = value else {
                    warn!(%property, "design system assignment without a value");
                    self.refresh_ui();
                    return;
                };

                let palette = if property == keys::ACCENT_BASE_COLOR {
                    accent_palette_for(&value)
                } else {
                    None
                };

                for node_id in &targets {
                    if let Some(node) = self.host.get_node_mut(node_id) {
                        node.set_design_system_property(&property, value.clone());
                        if let Some(palette) = &palette {
                            node.set_design_system_property(
                                keys::ACCENT_PALETTE,
                                DesignSystemValue::List(palette.clone()),
                            );
                        }
                    }
                }
            }
            DesignSystemAction::Delete => {
                for node_id in &targets {
                    if let Some(node) = self.host.get_node_mut(node_id) {
                        node.delete_design_system_property(&property);
                    }
                }
            }
        }

        for node_id in &targets {
            self.paint_tree(node_id);
        }
        self.refresh_ui();
    }

    fn reset(&mut self, node_ids: &[String]) {
        for node_id in node_ids {
            let Some(node) = self.host.get_node_mut(node_id) else {
                warn!(node = %node_id, "node not found, skipping reset");
                continue;
            };
            let names: Vec<String> = node.design_system_overrides().keys().map(str::to_string).collect();
            for name in &names {
                node.delete_design_system_property(name);
            }
            node.set_recipes(Vec::new());
        }

        self.refresh_ui();
    }

    fn export(&mut self, node_ids: &[String]) {
        for node_id in node_ids {
            match self.exporter.export_artifact(&self.host, &self.registry, node_id) {
                Ok(artifact) => self.ui.deliver_export(artifact),
                Err(err) => warn!(node = %node_id, %err, "export failed"),
            }
        }
    }

    fn refresh_ui(&mut self) {
        let state = self.plugin_ui_state();
        self.ui.set_plugin_ui_state(state);
    }

    /// Evaluate one recipe for one node, logging failures.
    fn compute(&self, recipe_id: &str, node_id: &str) -> Option<RecipeOutput> {
        match self.registry.to_data(recipe_id, &self.host, node_id) {
            Ok(output) => Some(output),
            Err(err) => {
                warn!(node = node_id, recipe = recipe_id, %err, "skipping recipe");
                None
            }
        }
    }

    fn paint(&mut self, node_id: &str, outputs: &[RecipeOutput]) {
        if let Some(node) = self.host.get_node_mut(node_id) {
            for output in outputs {
                node.paint(output);
            }
        }
    }

    fn recipe_type_of(&self, recipe_id: &str) -> Option<RecipeType> {
        self.registry.get(recipe_id).ok().map(|definition| definition.recipe_type)
    }

    /// `current` without recipes of `recipe_type`, followed by `id`.
    fn replace_recipe_of_type(&self, current: &[String], recipe_type: RecipeType, id: &str) -> Vec<String> {
        current
            .iter()
            .filter(|recipe_id| self.recipe_type_of(recipe_id) != Some(recipe_type))
            .cloned()
            .chain(std::iter::once(id.to_string()))
            .collect()
    }

    fn summarize(&self, node: &H::Node) -> SelectedNodeData {
        let accent_base_color = self
            .registry
            .resolver()
            .effective(&self.host, node.id())
            .ok()
            .and_then(|effective| effective.get(keys::ACCENT_BASE_COLOR).cloned())
            .or_else(|| self.registry.resolver().defaults().get(keys::ACCENT_BASE_COLOR).cloned());

        let mut design_system = DesignSystem::new();
        if let Some(accent) = accent_base_color {
            design_system.set(keys::ACCENT_BASE_COLOR, accent);
        }

        SelectedNodeData {
            id: node.id().to_string(),
            node_type: node.node_type().to_string(),
            supports: node.supports(),
            recipes: node.recipes().to_vec(),
            design_system: design_system.merged_with(node.design_system_overrides()),
        }
    }
}

/// The 63-entry palette for an accent base color, or `None` if the value is
/// not a parsable hex color.
fn accent_palette_for(value: &DesignSystemValue) -> Option<Vec<String>> {
    let color = value.as_str().and_then(Color::from_hex)?;
    Some(palette_to_hex(&create_color_palette(&color)))
}
