//! Story Compiler Component
//!
//! Provides lexer, recursive descent parser, semantic validation and HTML
//! generation for the branching story language.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes story source
//! - [`Token`] / [`TokenKind`] - Classified lexemes
//! - [`Parser`] - Recursive descent parser extracting declared scenes
//! - [`SemanticAnalyzer`] - Builds and validates the scene graph
//! - [`compile`] - The whole pipeline, source to [`story_types::SceneGraph`]
//! - [`HtmlGenerator`] - Renders a scene graph to an interactive page
//!
//! # Example
//!
//! ```
//! use story_compiler::{compile, HtmlGenerator};
//!
//! let source = r#"
//! scene: START
//! text: "Intro"
//! choice: "Go" -> END
//!
//! scene: END
//! text: "The end."
//! "#;
//! let graph = compile(source).unwrap();
//!
//! let html = HtmlGenerator::new().generate(&graph);
//! assert!(html.contains("showScene('END')"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod error;
pub mod html_gen;
pub mod lexer;
pub mod parser;
pub mod semantic;

pub use compiler::compile;
pub use html_gen::HtmlGenerator;
pub use lexer::{scan, Lexer, Token, TokenKind};
pub use parser::{parse, ParsedScene, Parser};
pub use semantic::{build, validate, SemanticAnalyzer};
