//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::sync::mpsc;

use anyhow::{Context, Result};
use swatch_color::DesignSystemParams;
use swatch_controller::{Controller, RecordingUi, UiMessage};
use swatch_core::{DesignSystem, RecipeValue};
use swatch_export::{ExportConfig, Exporter};
use swatch_node::MemoryHost;
use swatch_recipes::RecipeRegistry;
use swatch_resolver::DesignSystemResolver;
use tracing::info;

use crate::cli::{RecipesArgs, RunArgs};

/// What a run produced.
pub struct RunSummary {
    pub commands: usize,
    pub exports: usize,
}

pub fn run(args: &RunArgs) -> Result<RunSummary> {
    let tree = fs::read_to_string(&args.tree)
        .with_context(|| format!("reading tree {}", args.tree.display()))?;
    let host = MemoryHost::from_json_str(&tree)
        .with_context(|| format!("parsing tree {}", args.tree.display()))?;

    let exporter = match &args.export_config {
        Some(path) => Exporter::new(
            ExportConfig::from_path(path)
                .with_context(|| format!("loading export config {}", path.display()))?,
        ),
        None => Exporter::default(),
    };

    let registry = registry_with_defaults(args.defaults.as_deref())?;
    let messages = match &args.commands {
        Some(path) => read_commands(path)?,
        None => Vec::new(),
    };

    info!(nodes = host.len(), commands = messages.len(), "starting run");

    let mut controller = Controller::new(host, RecordingUi::new())
        .with_registry(registry)
        .with_exporter(exporter);
    if !args.select.is_empty() {
        controller.set_selected_nodes(args.select.iter().cloned());
    }

    let (sender, receiver) = mpsc::channel();
    for message in messages {
        sender.send(message).context("queueing command")?;
    }
    drop(sender);
    let commands = controller.run(receiver);

    let state = controller.plugin_ui_state();
    let (host, ui) = controller.into_parts();

    match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

            let tree_path = dir.join("tree.json");
            fs::write(&tree_path, host.to_json_string()?)
                .with_context(|| format!("writing {}", tree_path.display()))?;

            let state_path = dir.join("state.json");
            fs::write(&state_path, serde_json::to_string_pretty(&state)?)
                .with_context(|| format!("writing {}", state_path.display()))?;

            for (index, artifact) in ui.exports.iter().enumerate() {
                let name = if index == 0 {
                    artifact.file_name.clone()
                } else {
                    numbered(&artifact.file_name, index)
                };
                let path = dir.join(name);
                fs::write(&path, artifact.to_json_pretty()?)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), "wrote export");
            }
            info!(dir = %dir.display(), "wrote outputs");
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&state)?);
            for artifact in &ui.exports {
                println!("{}", artifact.to_json_pretty()?);
            }
        }
    }

    Ok(RunSummary {
        commands,
        exports: ui.exports.len(),
    })
}

pub fn list_recipes(args: &RecipesArgs) -> Result<()> {
    let registry = registry_with_defaults(args.defaults.as_deref())?;
    let params = DesignSystemParams::from_design_system(registry.resolver().defaults());

    for recipe_type in registry.types() {
        println!("{recipe_type}");
        for definition in registry.find(recipe_type) {
            let value = match definition.evaluate(&params) {
                RecipeValue::Color(color) => color.to_hex(),
                RecipeValue::Number(n) => n.to_string(),
            };
            println!("  {:<32} {:<34} {value}", definition.id, definition.name);
        }
    }
    Ok(())
}

fn registry_with_defaults(path: Option<&Path>) -> Result<RecipeRegistry> {
    let resolver = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading defaults {}", path.display()))?;
            let overrides: DesignSystem = serde_json::from_str(&json)
                .with_context(|| format!("parsing defaults {}", path.display()))?;
            DesignSystemResolver::with_default_overrides(&overrides)
        }
        None => DesignSystemResolver::default(),
    };
    Ok(RecipeRegistry::with_defaults_and_resolver(resolver))
}

fn read_commands(path: &Path) -> Result<Vec<UiMessage>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading commands {}", path.display()))?;
    parse_commands(&text).with_context(|| format!("parsing commands {}", path.display()))
}

fn parse_commands(text: &str) -> Result<Vec<UiMessage>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            UiMessage::from_json_str(line).with_context(|| format!("line {}", index + 1))
        })
        .collect()
}

/// `FluentTokens.json` -> `FluentTokens-2.json` for the third export.
fn numbered(file_name: &str, index: usize) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-{index}.{ext}"),
        None => format!("{file_name}-{index}"),
    }
}
