//! End-to-end command handling over an in-memory tree.

use std::sync::mpsc;

use serde_json::json;
use swatch_color::palette::{create_color_palette, palette_to_hex, PALETTE_SIZE};
use swatch_color::{contrast, DesignSystemParams};
use swatch_controller::{Controller, RecordingUi, UiMessage};
use swatch_core::{keys, Color, DesignSystemValue, RecipeType, RecipeValue};
use swatch_node::{node_types, MemoryHost, MemoryNode, NodeHost, PluginNode};

const BUTTON: &str = "Button / State / Accent /⚡ Press";
const HEADER: &str = "02. iPhone 8 / 01. Portrait / 🔵 B. Large Title + Search - Primary";

/// page (FRAME)
/// ├── card (FRAME)
/// │   ├── title (TEXT)
/// │   └── swatch (RECTANGLE)
/// └── footer (FRAME)
fn page() -> MemoryHost {
    let mut host = MemoryHost::new();
    host.insert_root(MemoryNode::new("page", node_types::FRAME));
    host.insert_child("page", MemoryNode::new("card", node_types::FRAME))
        .unwrap();
    host.insert_child("card", MemoryNode::new("title", node_types::TEXT))
        .unwrap();
    host.insert_child("card", MemoryNode::new("swatch", node_types::RECTANGLE))
        .unwrap();
    host.insert_child("page", MemoryNode::new("footer", node_types::FRAME))
        .unwrap();
    host
}

fn controller(host: MemoryHost) -> Controller<MemoryHost, RecordingUi> {
    Controller::new(host, RecordingUi::new())
}

fn node<'a>(controller: &'a Controller<MemoryHost, RecordingUi>, id: &str) -> &'a MemoryNode {
    controller.host().get_node(id).unwrap()
}

#[test]
fn test_background_assignment_paints_subtree_in_pre_order() {
    let mut host = page();
    host.get_node_mut("title")
        .unwrap()
        .set_recipes(vec!["neutralForegroundRest".to_string()]);
    host.get_node_mut("swatch")
        .unwrap()
        .set_recipes(vec!["square".to_string()]);
    let mut controller = controller(host);

    controller.handle_message(UiMessage::assign_recipe("neutralLayerL2", ["card"]));

    assert_eq!(node(&controller, "card").paint_log.len(), 1);
    assert_eq!(node(&controller, "title").paint_log.len(), 1);
    assert_eq!(node(&controller, "swatch").paint_log.len(), 1);
    assert!(node(&controller, "footer").paint_log.is_empty());
    assert!(node(&controller, "page").paint_log.is_empty());
}

#[test]
fn test_non_background_assignment_paints_only_target() {
    let mut host = page();
    host.get_node_mut("swatch")
        .unwrap()
        .set_recipes(vec!["square".to_string()]);
    let mut controller = controller(host);

    controller.handle_message(UiMessage::assign_recipe("neutralOutlineRest", ["card"]));

    let card = node(&controller, "card");
    assert_eq!(card.paint_log.len(), 1);
    assert!(card.painted.stroke.is_some());
    assert!(node(&controller, "swatch").paint_log.is_empty());
}

#[test]
fn test_same_type_assignment_replaces() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralFillRest", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("control", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("neutralLayerL1", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("round", ["card"]));

    assert_eq!(node(&controller, "card").recipes, vec!["neutralLayerL1", "round"]);
    assert_eq!(node(&controller, "card").painted.corner_radius, Some(9999.0));
}

#[test]
fn test_remove_recipe_strips_type_without_repaint() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralOutlineRest", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("surface", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("neutralForegroundRest", ["title"]));
    controller.host_mut().clear_paint_logs();

    controller.handle_message(UiMessage::remove_recipe(RecipeType::StrokeFill, ["card"]));

    assert_eq!(node(&controller, "card").recipes, vec!["surface"]);
    assert!(node(&controller, "card").paint_log.is_empty());
    assert!(node(&controller, "title").paint_log.is_empty());
    assert_eq!(controller.ui().states.len(), 4);
}

#[test]
fn test_remove_background_fill_repaints_subtree() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralFillRest", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("surface", ["card"]));
    controller.handle_message(UiMessage::assign_recipe("neutralForegroundRest", ["title"]));
    controller.host_mut().clear_paint_logs();

    controller.handle_message(UiMessage::remove_recipe(RecipeType::BackgroundFill, ["card"]));

    let card = node(&controller, "card");
    assert_eq!(card.recipes, vec!["surface"]);
    assert_eq!(card.paint_log.len(), 1);
    assert_eq!(card.paint_log[0].id, "surface");
    assert_eq!(node(&controller, "title").paint_log.len(), 1);
    assert!(node(&controller, "footer").paint_log.is_empty());
    assert_eq!(controller.ui().states.len(), 4);
}

#[test]
fn test_missing_nodes_are_skipped() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("control", ["ghost", "card", "phantom"]));
    assert_eq!(node(&controller, "card").recipes, vec!["control"]);

    controller.handle_message(UiMessage::set_design_system(keys::CORNER_RADIUS, 4.0, ["ghost", "footer"]));
    assert_eq!(
        node(&controller, "footer").design_system.get(keys::CORNER_RADIUS),
        Some(&DesignSystemValue::Number(4.0))
    );

    controller.handle_message(UiMessage::sync(["ghost", "page"]));
    assert_eq!(controller.ui().states.len(), 3);
}

#[test]
fn test_sync_is_idempotent() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralLayerL3", ["page"]));
    controller.handle_message(UiMessage::assign_recipe("neutralForegroundRest", ["title"]));
    controller.handle_message(UiMessage::assign_recipe("control", ["swatch"]));

    let mut sync = || {
        controller.host_mut().clear_paint_logs();
        controller.handle_message(UiMessage::sync(["page"]));
        let paints: Vec<(String, Vec<_>)> = controller
            .host()
            .nodes()
            .map(|node| (node.id.clone(), node.paint_log.clone()))
            .collect();
        let state = controller.ui().last_state().cloned();
        (controller.host().to_json_string().unwrap(), paints, state)
    };

    let (first_tree, first_paints, first_state) = sync();
    let (second_tree, second_paints, second_state) = sync();

    assert_eq!(first_tree, second_tree);
    assert!(first_paints.iter().any(|(_, log)| !log.is_empty()));
    assert_eq!(first_paints, second_paints);
    assert!(first_state.is_some());
    assert_eq!(first_state, second_state);
}

#[test]
fn test_ancestor_change_recomputes_descendants() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralFillRest", ["swatch"]));
    let before = node(&controller, "swatch").painted.fill;

    controller.handle_message(UiMessage::set_design_system(keys::BACKGROUND_COLOR, "#1A1A1A", ["page"]));

    let after = node(&controller, "swatch").painted.fill;
    assert_ne!(before, after);

    let expected = controller
        .registry()
        .to_data("neutralFillRest", controller.host(), "swatch")
        .unwrap();
    assert_eq!(after.map(RecipeValue::Color), Some(expected.value));
}

#[test]
fn test_delete_override_restores_inherited_paint() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("control", ["swatch"]));
    assert_eq!(node(&controller, "swatch").painted.corner_radius, Some(2.0));

    controller.handle_message(UiMessage::set_design_system(keys::CORNER_RADIUS, 12.0, ["card"]));
    assert_eq!(node(&controller, "swatch").painted.corner_radius, Some(12.0));

    controller.handle_message(UiMessage::delete_design_system(keys::CORNER_RADIUS, ["card"]));
    assert_eq!(node(&controller, "swatch").painted.corner_radius, Some(2.0));
}

#[test]
fn test_accent_palette_cascade() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::set_design_system(keys::ACCENT_BASE_COLOR, "#FF0000", ["card", "footer"]));

    let expected = palette_to_hex(&create_color_palette(&Color::from_hex("#FF0000").unwrap()));
    assert_eq!(expected.len(), PALETTE_SIZE);
    for id in ["card", "footer"] {
        assert_eq!(
            node(&controller, id).design_system.get(keys::ACCENT_PALETTE),
            Some(&DesignSystemValue::List(expected.clone()))
        );
    }
    assert!(!node(&controller, "page").design_system.contains(keys::ACCENT_PALETTE));
}

#[test]
fn test_invalid_accent_leaves_palette_untouched() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::set_design_system(keys::ACCENT_BASE_COLOR, "#00FF00", ["card"]));
    let palette = node(&controller, "card").design_system.get(keys::ACCENT_PALETTE).cloned();

    controller.handle_message(UiMessage::set_design_system(keys::ACCENT_BASE_COLOR, "not a color", ["card"]));

    let card = node(&controller, "card");
    assert_eq!(
        card.design_system.get(keys::ACCENT_BASE_COLOR),
        Some(&DesignSystemValue::from("not a color"))
    );
    assert_eq!(card.design_system.get(keys::ACCENT_PALETTE).cloned(), palette);
}

#[test]
fn test_reset_clears_without_repaint() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::set_design_system(keys::CORNER_RADIUS, 6.0, ["page"]));
    controller.handle_message(UiMessage::assign_recipe("neutralLayerL4", ["card"]));
    controller.handle_message(UiMessage::set_design_system(keys::BACKGROUND_COLOR, "#202020", ["card"]));
    controller.handle_message(UiMessage::set_design_system(keys::CORNER_RADIUS, 3.0, ["card"]));
    let painted = node(&controller, "card").painted.clone();
    controller.host_mut().clear_paint_logs();
    let states_before = controller.ui().states.len();

    controller.handle_message(UiMessage::reset(["card"]));

    let card = node(&controller, "card");
    assert!(card.recipes.is_empty());
    assert!(card.design_system.is_empty());
    assert!(card.paint_log.is_empty());
    assert_eq!(card.painted, painted);
    assert_eq!(controller.ui().states.len(), states_before + 1);

    let resolver = controller.registry().resolver();
    assert_eq!(
        resolver.effective(controller.host(), "card").unwrap().get(keys::CORNER_RADIUS),
        Some(&DesignSystemValue::Number(6.0))
    );
    assert_eq!(
        resolver.effective(controller.host(), "card").unwrap(),
        resolver.effective(controller.host(), "page").unwrap()
    );
}

#[test]
fn test_toggle_foreground_uses_an_endpoint() {
    for background in ["#FFFFFF", "#000000", "#777777", "#333333"] {
        let mut host = page();
        host.get_node_mut("page")
            .unwrap()
            .set_design_system_property(keys::BACKGROUND_COLOR, background.into());
        let mut controller = controller(host);
        controller.handle_message(UiMessage::assign_recipe("neutralFillToggleRest", ["card"]));
        controller.handle_message(UiMessage::assign_recipe("neutralForegroundToggle", ["card"]));

        let card = node(&controller, "card");
        let fill = card.painted.fill.unwrap();
        let text = card.painted.text_fill.unwrap();
        assert!(text == Color::WHITE || text == Color::BLACK, "{background}: {text}");
        assert!(contrast(&text, &fill) >= 4.5, "{background}: {text} on {fill}");
    }
}

#[test]
fn test_toggle_foreground_is_white_on_light_background() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::assign_recipe("neutralForegroundToggle", ["title"]));
    assert_eq!(node(&controller, "title").painted.text_fill, Some(Color::WHITE));
}

#[test]
fn test_ui_snapshot_reflects_selection() {
    let mut controller = controller(page());
    controller.handle_message(UiMessage::set_design_system(keys::ACCENT_BASE_COLOR, "#FF0000", ["page"]));
    controller.set_selected_nodes(["title", "card"]);

    let state = controller.ui().last_state().unwrap().clone();
    assert_eq!(state.selected_nodes.len(), 2);
    assert_eq!(state.selected_nodes[0].id, "title");
    assert_eq!(
        state.selected_nodes[0].design_system.get(keys::ACCENT_BASE_COLOR),
        Some(&DesignSystemValue::from("#FF0000"))
    );

    let radii = state.options_for(RecipeType::CornerRadius).unwrap();
    let defaults = DesignSystemParams::default();
    assert_eq!(radii[1].id, "control");
    assert_eq!(radii[1].value, RecipeValue::Number(defaults.corner_radius));
}

#[test]
fn test_export_two_levels() {
    let mut host = MemoryHost::new();
    host.insert_root(MemoryNode::new("page", node_types::FRAME));
    host.insert_child(
        "page",
        MemoryNode::new("header", node_types::INSTANCE)
            .with_component_name(HEADER)
            .with_recipes(["neutralFillCard"]),
    )
    .unwrap();
    host.insert_child("page", MemoryNode::new("row", node_types::FRAME))
        .unwrap();
    host.insert_child(
        "row",
        MemoryNode::new("button", node_types::INSTANCE)
            .with_component_name(BUTTON)
            .with_recipes(["accentFillRest", "control"]),
    )
    .unwrap();
    let mut controller = controller(host);

    controller.handle_message(UiMessage::export(["page"]));

    let exports = &controller.ui().exports;
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0].file_name, "FluentTokens.json");
    assert_eq!(
        exports[0].document.clone().into_value(),
        json!({
            "Global": {"Color": {"Accent": {"buildRampFrom": "#0078D4"}}},
            "Header": {"Root": {"Fill": {"Color": {"aliasOf": "Global.Color.Gray.20"}}}},
            "AccentButton": {
                "Root": {
                    "Fill": {"Color": {"aliasOf": "Set.TempAccentBkg.Fill.Color"}},
                    "Corner": {"aliasOf": "Set.Control.Corner"}
                }
            }
        })
    );
    assert!(controller.ui().states.is_empty());
}

#[test]
fn test_run_drains_channel_in_order() {
    let mut controller = controller(page());
    let (sender, receiver) = mpsc::channel();

    let producer = std::thread::spawn(move || {
        for message in [
            UiMessage::assign_recipe("neutralFillRest", ["card"]),
            UiMessage::assign_recipe("neutralLayerL1", ["card"]),
            UiMessage::Unknown,
            UiMessage::sync(["card"]),
        ] {
            sender.send(message).unwrap();
        }
    });

    let processed = controller.run(receiver);
    producer.join().unwrap();

    assert_eq!(processed, 4);
    assert_eq!(node(&controller, "card").recipes, vec!["neutralLayerL1"]);
    assert_eq!(controller.ui().states.len(), 3);
}

#[test]
fn test_commands_from_json_lines() {
    let mut controller = controller(page());
    let lines = [
        r#"{"type": "recipe", "action": "assign", "id": "illustration", "nodeIds": ["card"]}"#,
        r#"{"type": "designSystem", "action": "assign", "property": "elevatedCornerRadius", "value": 5, "nodeIds": ["page"]}"#,
    ];
    for line in lines {
        controller.handle_message(UiMessage::from_json_str(line).unwrap());
    }
    assert_eq!(node(&controller, "card").painted.corner_radius, Some(10.0));
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use swatch_recipes::default_recipes;

    proptest! {
        #[test]
        fn prop_at_most_one_recipe_per_type(picks in prop::collection::vec(0usize..25, 1..20)) {
            let catalog = default_recipes();
            let mut controller = controller(page());
            for pick in &picks {
                let definition = &catalog[pick % catalog.len()];
                controller.handle_message(UiMessage::assign_recipe(definition.id.as_str(), ["card"]));
            }

            let recipes = &node(&controller, "card").recipes;
            for recipe_type in RecipeType::ALL {
                let of_type: Vec<_> = recipes
                    .iter()
                    .filter(|id| controller.registry().get(id).unwrap().recipe_type == recipe_type)
                    .collect();
                prop_assert!(of_type.len() <= 1);

                let last = picks
                    .iter()
                    .rev()
                    .map(|pick| &catalog[pick % catalog.len()])
                    .find(|definition| definition.recipe_type == recipe_type);
                prop_assert_eq!(of_type.first().map(|id| id.as_str()), last.map(|d| d.id.as_str()));
            }
        }
    }
}
