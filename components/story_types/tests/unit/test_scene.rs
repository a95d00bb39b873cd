//! Unit tests for Scene, Choice and SceneGraph

use story_types::{Choice, Scene, SceneGraph, START_SCENE};

fn two_scene_graph() -> SceneGraph {
    let mut graph = SceneGraph::new();
    graph
        .insert(Scene::new("START", "You are in a forest.").with_choice("Go left", "WOLF"))
        .unwrap();
    graph
        .insert(Scene::new("WOLF", "The wolf appears!").with_choice("Run", "START"))
        .unwrap();
    graph
}

#[cfg(test)]
mod scene_graph_tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph = SceneGraph::new();
        assert!(graph.is_empty());
        assert!(graph.start().is_none());
    }

    #[test]
    fn test_lookup() {
        let graph = two_scene_graph();
        assert!(graph.contains(START_SCENE));
        assert_eq!(graph.get("WOLF").unwrap().text, "The wolf appears!");
        assert!(graph.get("HUNTER").is_none());
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let graph = two_scene_graph();
        let ids: Vec<&str> = (&graph).into_iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["START", "WOLF"]);
    }

    #[test]
    fn test_choice_order_preserved() {
        let scene = Scene::new("START", "")
            .with_choice("Scream", "HUNTER")
            .with_choice("Run", "START")
            .with_choice("Surrender", "END");
        let labels: Vec<&str> = scene.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Scream", "Run", "Surrender"]);
    }

    #[test]
    fn test_graphs_compare_structurally() {
        assert_eq!(two_scene_graph(), two_scene_graph());
    }
}

#[cfg(test)]
mod serialization_tests {
    use super::*;

    #[test]
    fn test_graph_serializes_as_ordered_map() {
        let graph = two_scene_graph();
        let json = serde_json::to_string(&graph).unwrap();

        let start = json.find("\"START\"").unwrap();
        let wolf = json.find("\"WOLF\":").unwrap();
        assert!(start < wolf);
    }

    #[test]
    fn test_choice_serialization_fields() {
        let value = serde_json::to_value(Choice::new("Go", "END")).unwrap();
        assert_eq!(value["label"], "Go");
        assert_eq!(value["destination"], "END");
    }
}
