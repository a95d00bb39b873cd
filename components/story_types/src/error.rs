//! Story compilation error types.
//!
//! A compile either yields a scene graph or exactly one of these errors.
//! The [`ErrorKind`] says which pipeline stage rejected the story; the
//! [`ErrorDetail`] carries the structured reason.

use crate::SourcePosition;
use std::fmt;

/// The pipeline stage that rejected a story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character that starts no valid token
    LexicalError,
    /// The token sequence does not match the story grammar
    SyntaxError,
    /// The story is well formed but its scene graph is invalid
    SemanticError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexicalError => "Lexical error",
            ErrorKind::SyntaxError => "Syntax error",
            ErrorKind::SemanticError => "Semantic error",
        };
        f.write_str(name)
    }
}

/// Structured reason behind a [`StoryError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// A character outside every lexical class, or a `"` that is never closed
    UnexpectedCharacter(char),
    /// Grammar mismatch; `found` is `None` at end of input
    UnexpectedToken {
        /// Description of the construct the grammar required
        expected: String,
        /// Description of the token actually present
        found: Option<String>,
    },
    /// A scene identifier declared more than once
    DuplicateScene(String),
    /// No scene named `START`
    MissingStart,
    /// Choice destinations that name no defined scene
    UndefinedScenes(Vec<String>),
    /// Defined scenes with no path from `START`
    UnreachableScenes(Vec<String>),
}

impl ErrorDetail {
    /// The pipeline stage this detail belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorDetail::UnexpectedCharacter(_) => ErrorKind::LexicalError,
            ErrorDetail::UnexpectedToken { .. } => ErrorKind::SyntaxError,
            ErrorDetail::DuplicateScene(_)
            | ErrorDetail::MissingStart
            | ErrorDetail::UndefinedScenes(_)
            | ErrorDetail::UnreachableScenes(_) => ErrorKind::SemanticError,
        }
    }
}

/// A fatal story compilation error.
///
/// # Examples
///
/// ```
/// use story_types::{ErrorDetail, ErrorKind, SourcePosition, StoryError};
///
/// let error = StoryError::new(
///     ErrorDetail::UnexpectedCharacter('@'),
///     "Unexpected character '@'",
///     Some(SourcePosition { line: 2, column: 7, offset: 19 }),
/// );
///
/// assert_eq!(error.kind, ErrorKind::LexicalError);
/// assert_eq!(error.to_string(), "Unexpected character '@' at line 2, column 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", .message, position_suffix(.source_position))]
pub struct StoryError {
    /// The stage that failed
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Structured reason
    pub detail: ErrorDetail,
    /// Where in the source the problem was found, if it has a location
    pub source_position: Option<SourcePosition>,
}

impl StoryError {
    /// Create an error whose kind is derived from its detail.
    pub fn new(
        detail: ErrorDetail,
        message: impl Into<String>,
        source_position: Option<SourcePosition>,
    ) -> Self {
        Self {
            kind: detail.kind(),
            message: message.into(),
            detail,
            source_position,
        }
    }

    /// Scene identifiers named by a semantic error, empty otherwise.
    pub fn identifiers(&self) -> &[String] {
        match &self.detail {
            ErrorDetail::UndefinedScenes(ids) | ErrorDetail::UnreachableScenes(ids) => ids,
            ErrorDetail::DuplicateScene(id) => std::slice::from_ref(id),
            _ => &[],
        }
    }
}

fn position_suffix(position: &Option<SourcePosition>) -> String {
    match position {
        Some(pos) => format!(" at {}", pos),
        None => String::new(),
    }
}
