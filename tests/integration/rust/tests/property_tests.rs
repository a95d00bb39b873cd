//! Property tests for scanner, grammar and scene graph invariants

use proptest::prelude::*;
use story_compiler::semantic::reachable_from;
use story_compiler::{compile, parse, scan};
use story_types::{Choice, ErrorDetail, ErrorKind, Scene, SceneGraph, START_SCENE};

/// Stories that are valid by construction: every scene after the first gets
/// an incoming choice from an earlier scene, plus some arbitrary extra edges.
fn valid_story() -> impl Strategy<Value = Vec<Scene>> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<usize>(), n),
            prop::collection::vec((any::<usize>(), any::<usize>()), 0..10),
            prop::collection::vec("[A-Za-z0-9 .,!?']{0,24}", n),
        )
            .prop_map(move |(parents, extra, texts)| {
                let ids: Vec<String> = (0..n)
                    .map(|i| {
                        if i == 0 {
                            START_SCENE.to_string()
                        } else {
                            format!("SCENE_{}", i)
                        }
                    })
                    .collect();
                let mut scenes: Vec<Scene> = ids
                    .iter()
                    .zip(texts)
                    .map(|(id, text)| Scene::new(id.clone(), text))
                    .collect();
                for i in 1..n {
                    let parent = parents[i] % i;
                    scenes[parent]
                        .choices
                        .push(Choice::new(format!("To scene {}", i), ids[i].clone()));
                }
                for (from, to) in extra {
                    scenes[from % n]
                        .choices
                        .push(Choice::new("Jump", ids[to % n].clone()));
                }
                scenes
            })
    })
}

fn render_source(scenes: &[Scene]) -> String {
    let mut source = String::new();
    for scene in scenes {
        source.push_str(&format!("scene: {}\ntext: \"{}\"\n", scene.id, scene.text));
        for choice in &scene.choices {
            source.push_str(&format!(
                "choice: \"{}\" -> {}\n",
                choice.label, choice.destination
            ));
        }
        source.push('\n');
    }
    source
}

fn is_recognized(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | ':' | '-' | '"' | ' ' | '\t' | '\n' | '\r')
}

proptest! {
    #[test]
    fn scanned_valid_source_is_accepted_by_parser(scenes in valid_story()) {
        let tokens = scan(&render_source(&scenes)).unwrap();
        prop_assert!(parse(&tokens).is_ok());
    }

    #[test]
    fn compiled_graph_matches_source(scenes in valid_story()) {
        let graph = compile(&render_source(&scenes)).unwrap();

        let mut expected = SceneGraph::new();
        for scene in scenes {
            expected.insert(scene).unwrap();
        }
        prop_assert_eq!(graph, expected);
    }

    #[test]
    fn compiled_graph_invariants_hold(scenes in valid_story()) {
        let graph = compile(&render_source(&scenes)).unwrap();

        prop_assert!(graph.contains(START_SCENE));
        for scene in &graph {
            for dest in scene.destinations() {
                prop_assert!(graph.contains(dest), "dangling edge to {}", dest);
            }
        }
        prop_assert_eq!(reachable_from(&graph, START_SCENE).len(), graph.len());
    }

    #[test]
    fn compile_is_idempotent(scenes in valid_story()) {
        let source = render_source(&scenes);
        prop_assert_eq!(compile(&source).unwrap(), compile(&source).unwrap());
    }

    #[test]
    fn unrecognized_character_is_lexical_error(
        ch in any::<char>().prop_filter("must be outside the lexical classes", |c| !is_recognized(*c))
    ) {
        let err = compile(&format!("scene: START\ntext: {}\n", ch)).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::LexicalError);
        prop_assert_eq!(err.detail, ErrorDetail::UnexpectedCharacter(ch));
    }

    #[test]
    fn unreferenced_extra_scene_is_unreachable(scenes in valid_story()) {
        let mut source = render_source(&scenes);
        source.push_str("scene: LOST_SCENE\ntext: \"Nobody comes here.\"\n");

        let err = compile(&source).unwrap_err();
        prop_assert_eq!(
            err.detail,
            ErrorDetail::UnreachableScenes(vec!["LOST_SCENE".to_string()])
        );
    }
}
