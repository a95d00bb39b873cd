//! Compiler error constructors

use story_types::{ErrorDetail, SourcePosition, StoryError};

/// Create a lexical error for a character that starts no token
pub fn lexical_error(ch: char, position: SourcePosition) -> StoryError {
    StoryError::new(
        ErrorDetail::UnexpectedCharacter(ch),
        format!("Unexpected character: {}", describe_char(ch)),
        Some(position),
    )
}

/// Create a lexical error for a string literal with no closing quote
pub fn unterminated_string(position: SourcePosition) -> StoryError {
    StoryError::new(
        ErrorDetail::UnexpectedCharacter('"'),
        "Unexpected character: '\"' (string literal is not closed on this line)",
        Some(position),
    )
}

/// Create an unexpected token error
pub fn unexpected_token(expected: &str, found: &str, position: SourcePosition) -> StoryError {
    StoryError::new(
        ErrorDetail::UnexpectedToken {
            expected: expected.to_string(),
            found: Some(found.to_string()),
        },
        format!("Expected {}, found {}", expected, found),
        Some(position),
    )
}

/// Create an unexpected end of input error
pub fn unexpected_eof(expected: &str, position: Option<SourcePosition>) -> StoryError {
    StoryError::new(
        ErrorDetail::UnexpectedToken {
            expected: expected.to_string(),
            found: None,
        },
        format!("Expected {}, found end of input", expected),
        position,
    )
}

/// Create a semantic error
pub fn semantic_error(
    detail: ErrorDetail,
    message: impl Into<String>,
    position: Option<SourcePosition>,
) -> StoryError {
    StoryError::new(detail, message, position)
}

fn describe_char(ch: char) -> String {
    if ch.is_control() {
        format!("'{}'", ch.escape_default())
    } else {
        format!("'{}'", ch)
    }
}
