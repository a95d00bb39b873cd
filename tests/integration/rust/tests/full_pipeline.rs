//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Lexer -> Parser -> SemanticAnalyzer -> SceneGraph -> HTML

use story_compiler::{compile, parse, scan, HtmlGenerator};
use story_types::{Choice, ErrorDetail, ErrorKind, Scene, SceneGraph, StoryError};

/// Helper to unwrap a compile error
fn compile_err(source: &str) -> StoryError {
    match compile(source) {
        Ok(graph) => panic!("Expected compile error, got {:?}", graph),
        Err(e) => e,
    }
}

/// Scenario A: single scene, no choices
#[test]
fn test_full_pipeline_single_scene() {
    let graph = compile("scene: START\ntext: \"Hi.\"\n").expect("Compilation failed");

    let mut expected = SceneGraph::new();
    expected.insert(Scene::new("START", "Hi.")).unwrap();
    assert_eq!(graph, expected);
}

/// Scenario B: dangling destination
#[test]
fn test_full_pipeline_undefined_destination() {
    let err = compile_err(
        r#"
        scene: START
        text: "Begin here."
        choice: "Go" -> END
        "#,
    );

    assert_eq!(err.kind, ErrorKind::SemanticError);
    assert_eq!(err.identifiers(), ["END".to_string()]);
    assert!(err.message.contains("Undefined scene destinations"));
}

/// Scenario C: scene with no incoming choice
#[test]
fn test_full_pipeline_unreachable_scene() {
    let err = compile_err(
        r#"
        scene: START
        text: "Entry point."

        scene: ORPHAN
        text: "This scene is not reachable."
        "#,
    );

    assert_eq!(
        err.detail,
        ErrorDetail::UnreachableScenes(vec!["ORPHAN".to_string()])
    );
    assert!(err.message.contains("Unreachable scenes"));
}

/// Scenario D: missing text clause
#[test]
fn test_full_pipeline_missing_text() {
    let err = compile_err("scene: START\n");

    assert_eq!(err.kind, ErrorKind::SyntaxError);
    assert_eq!(
        err.detail,
        ErrorDetail::UnexpectedToken {
            expected: "'text'".to_string(),
            found: None,
        }
    );
}

/// Scenario E: invalid character
#[test]
fn test_full_pipeline_invalid_character() {
    let err = compile_err("scene: START\ntext: @\n");

    assert_eq!(err.kind, ErrorKind::LexicalError);
    assert_eq!(err.detail, ErrorDetail::UnexpectedCharacter('@'));
    assert!(err.message.contains('@'));
}

/// Every undefined destination is reported, not just the first
#[test]
fn test_full_pipeline_reports_every_undefined_destination() {
    let err = compile_err(
        r#"
        scene: START
        text: "Crossroads."
        choice: "North" -> NORTH
        choice: "South" -> SOUTH
        choice: "East" -> EAST

        scene: EAST
        text: "The sun rises."
        choice: "Further" -> FAR_EAST
        "#,
    );

    assert_eq!(
        err.identifiers(),
        ["NORTH".to_string(), "SOUTH".to_string(), "FAR_EAST".to_string()]
    );
}

/// Every unreachable scene is reported, including chains among themselves
#[test]
fn test_full_pipeline_reports_every_unreachable_scene() {
    let err = compile_err(
        r#"
        scene: START
        text: "Home."

        scene: ISLAND
        text: "Cut off."
        choice: "Swim" -> REEF

        scene: REEF
        text: "Still cut off."
        choice: "Back" -> ISLAND
        "#,
    );

    assert_eq!(
        err.detail,
        ErrorDetail::UnreachableScenes(vec!["ISLAND".to_string(), "REEF".to_string()])
    );
}

/// A scene may point back to itself or to START
#[test]
fn test_full_pipeline_cycles_are_valid() {
    let graph = compile(
        r#"
        scene: START
        text: "Loop."
        choice: "Again" -> START
        choice: "On" -> NEXT
        scene: NEXT
        text: "Next."
        choice: "Back" -> START
        "#,
    )
    .expect("Compilation failed");

    assert_eq!(graph.edge_count(), 3);
}

/// START need not be the first declared scene
#[test]
fn test_full_pipeline_start_declared_later() {
    let graph = compile(
        r#"
        scene: END
        text: "Done."
        scene: START
        text: "Begin."
        choice: "Finish" -> END
        "#,
    )
    .expect("Compilation failed");

    assert_eq!(graph.ids().collect::<Vec<_>>(), vec!["END", "START"]);
}

/// Duplicate scene identifiers are rejected
#[test]
fn test_full_pipeline_duplicate_scene() {
    let err = compile_err(
        r#"
        scene: START
        text: "One."
        scene: START
        text: "Two."
        "#,
    );

    assert_eq!(err.kind, ErrorKind::SemanticError);
    assert_eq!(err.detail, ErrorDetail::DuplicateScene("START".to_string()));
}

/// Windows line endings are accepted
#[test]
fn test_full_pipeline_crlf_source() {
    let graph = compile("scene: START\r\ntext: \"Hi.\"\r\nchoice: \"Stay\" -> START\r\n")
        .expect("Compilation failed");

    assert_eq!(graph.start().unwrap().choices, vec![Choice::new("Stay", "START")]);
}

/// Scanner output is accepted by the grammar check on its own
#[test]
fn test_full_pipeline_stages_separately() {
    let source = r#"scene: START text: "a" choice: "b" -> START"#;
    let tokens = scan(source).expect("Scan failed");
    parse(&tokens).expect("Parse failed");
    assert_eq!(compile(source).unwrap().len(), 1);
}

/// Compile then render
#[test]
fn test_full_pipeline_to_html() {
    let graph = compile(
        r#"
        scene: START
        text: "You wake up in a dark cave."
        choice: "Go left" -> DRAGON
        scene: DRAGON
        text: "A dragon appears!"
        "#,
    )
    .expect("Compilation failed");

    let html = HtmlGenerator::new().generate(&graph);
    assert!(html.contains("<div class='scene' id='START'>"));
    assert!(html.contains("<button onclick=\"showScene('DRAGON')\">Go left</button>"));
    assert!(html.contains("<script>showScene('START');</script>"));
}
