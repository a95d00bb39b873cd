//! Semantic analysis for parsed stories
//!
//! Turns declared scenes into a [`SceneGraph`] and rejects graphs that could
//! not be played: duplicate identifiers, a missing `START` scene, dangling
//! choice destinations and scenes no path from `START` reaches.

use crate::error::semantic_error;
use crate::lexer::Token;
use crate::parser::{ParsedScene, Parser};
use story_types::{ErrorDetail, SceneGraph, SourcePosition, StoryError, START_SCENE};
use std::collections::{HashMap, HashSet};

/// Builds a scene graph from declared scenes and validates it
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    graph: SceneGraph,
    declared_at: HashMap<String, SourcePosition>,
}

impl SemanticAnalyzer {
    /// Create an analyzer with an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every scene in declaration order, then run the graph checks
    pub fn analyze(mut self, scenes: Vec<ParsedScene>) -> Result<SceneGraph, StoryError> {
        for parsed in scenes {
            self.declare_scene(parsed)?;
        }
        validate(&self.graph)?;
        Ok(self.graph)
    }

    fn declare_scene(&mut self, parsed: ParsedScene) -> Result<(), StoryError> {
        let ParsedScene { scene, position } = parsed;
        let id = scene.id.clone();

        if let Err(duplicate) = self.graph.insert(scene) {
            let first = self.declared_at.get(&id).copied();
            let message = match first {
                Some(first) => format!(
                    "Duplicate scene identifier '{}' (first declared at {})",
                    duplicate.id, first
                ),
                None => format!("Duplicate scene identifier '{}'", duplicate.id),
            };
            return Err(semantic_error(
                ErrorDetail::DuplicateScene(duplicate.id),
                message,
                Some(position),
            ));
        }

        self.declared_at.insert(id, position);
        Ok(())
    }
}

/// Run the ordered graph checks: START, references, reachability
pub fn validate(graph: &SceneGraph) -> Result<(), StoryError> {
    if !graph.contains(START_SCENE) {
        return Err(semantic_error(
            ErrorDetail::MissingStart,
            "Missing START scene. Every story must begin with scene: START",
            None,
        ));
    }

    let undefined = undefined_destinations(graph);
    if !undefined.is_empty() {
        let message = format!("Undefined scene destinations: {}", undefined.join(", "));
        return Err(semantic_error(
            ErrorDetail::UndefinedScenes(undefined),
            message,
            None,
        ));
    }

    let unreachable = unreachable_scenes(graph);
    if !unreachable.is_empty() {
        let message = format!("Unreachable scenes detected: {}", unreachable.join(", "));
        return Err(semantic_error(
            ErrorDetail::UnreachableScenes(unreachable),
            message,
            None,
        ));
    }

    Ok(())
}

/// Every choice destination that names no scene, in order of first reference
pub fn undefined_destinations(graph: &SceneGraph) -> Vec<String> {
    let mut seen = HashSet::new();
    graph
        .iter()
        .flat_map(|scene| scene.destinations())
        .filter(|dest| !graph.contains(dest))
        .filter(|dest| seen.insert(*dest))
        .map(str::to_string)
        .collect()
}

/// Identifiers of scenes reachable from `root` by following choices
pub fn reachable_from<'g>(graph: &'g SceneGraph, root: &str) -> HashSet<&'g str> {
    let mut visited = HashSet::new();
    let mut stack: Vec<&'g str> = graph.get(root).map(|s| s.id.as_str()).into_iter().collect();

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }
        if let Some(scene) = graph.get(id) {
            // Reverse so the first choice is explored first
            for dest in scene.choices.iter().rev() {
                if let Some(next) = graph.get(&dest.destination) {
                    if !visited.contains(next.id.as_str()) {
                        stack.push(next.id.as_str());
                    }
                }
            }
        }
    }

    visited
}

/// Every scene no path from `START` reaches, in declaration order
pub fn unreachable_scenes(graph: &SceneGraph) -> Vec<String> {
    let reachable = reachable_from(graph, START_SCENE);
    graph
        .ids()
        .filter(|id| !reachable.contains(id))
        .map(str::to_string)
        .collect()
}

/// Extract and validate the scene graph described by a token sequence
pub fn build(tokens: &[Token]) -> Result<SceneGraph, StoryError> {
    let scenes = Parser::new(tokens).parse_story()?;
    let graph = SemanticAnalyzer::new().analyze(scenes)?;
    tracing::trace!(
        scenes = graph.len(),
        choices = graph.edge_count(),
        "scene graph validated"
    );
    Ok(graph)
}
