//! Source position type for story diagnostics.
//!
//! Every token and every positioned error carries one of these so messages
//! can point back at the offending spot in the story text.

use std::fmt;

/// Represents a position in story source text.
///
/// Lines and columns are 1-indexed; `offset` counts characters (not bytes)
/// from the start of the source.
///
/// # Examples
///
/// ```
/// use story_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 3,
///     column: 7,
///     offset: 42,
/// };
///
/// assert_eq!(pos.to_string(), "line 3, column 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Character offset from the start of the source
    pub offset: usize,
}

impl SourcePosition {
    /// Position of the first character of a source.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
