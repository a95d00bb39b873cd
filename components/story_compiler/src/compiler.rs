//! Compilation pipeline: scan, then parse and validate in one pass

use crate::lexer::scan;
use crate::semantic::build;
use story_types::{SceneGraph, StoryError};

/// Compile story source into a validated scene graph.
///
/// Scanning must succeed completely before the grammar pass starts; the
/// first error from either stage is returned unchanged.
///
/// # Example
/// ```
/// use story_compiler::compile;
///
/// let graph = compile("scene: START\ntext: \"Hi.\"\n").unwrap();
/// assert_eq!(graph.get("START").unwrap().text, "Hi.");
/// ```
pub fn compile(source: &str) -> Result<SceneGraph, StoryError> {
    let tokens = scan(source)?;
    tracing::debug!(tokens = tokens.len(), "scanned story source");

    let graph = build(&tokens)?;
    tracing::debug!(scenes = graph.len(), "compiled scene graph");

    Ok(graph)
}
