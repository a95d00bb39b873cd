//! Core story value types and error handling.
//!
//! This crate provides the foundational types shared by the story compiler
//! and its front ends: the scene graph a compile produces, the error a
//! failed compile produces, and source location tracking.
//!
//! # Overview
//!
//! - [`SceneGraph`] - Ordered mapping from scene identifier to [`Scene`]
//! - [`Scene`] / [`Choice`] - Narrative nodes and labeled edges
//! - [`StoryError`] - Compile failure with kind, message and position
//! - [`ErrorKind`] - Lexical, syntactic or semantic
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use story_types::{ErrorDetail, ErrorKind, Scene, SceneGraph, StoryError};
//!
//! let mut graph = SceneGraph::new();
//! graph.insert(Scene::new("START", "You are in a forest.")).unwrap();
//! assert_eq!(graph.len(), 1);
//!
//! let error = StoryError::new(ErrorDetail::MissingStart, "Missing START scene", None);
//! assert_eq!(error.kind, ErrorKind::SemanticError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod scene;
mod source;

pub use error::{ErrorDetail, ErrorKind, StoryError};
pub use scene::{Choice, Scene, SceneGraph, START_SCENE};
pub use source::SourcePosition;
