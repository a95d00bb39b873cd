//! Story Lexer - tokenizes story source into tokens

use crate::error::{lexical_error, unterminated_string};
use story_types::{SourcePosition, StoryError};
use std::fmt;

/// Lexical class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `scene` keyword
    SceneKeyword,
    /// `text` keyword
    TextKeyword,
    /// `choice` keyword
    ChoiceKeyword,
    /// `:`
    Colon,
    /// `->`
    Arrow,
    /// Scene identifier
    Identifier,
    /// Double-quoted string
    StringLiteral,
}

impl TokenKind {
    /// Short description used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::SceneKeyword => "'scene'",
            TokenKind::TextKeyword => "'text'",
            TokenKind::ChoiceKeyword => "'choice'",
            TokenKind::Colon => "':'",
            TokenKind::Arrow => "'->'",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lexical class
    pub kind: TokenKind,
    /// Matched text; string literals exclude their quotes
    pub lexeme: String,
    /// Position of the token's first character
    pub position: SourcePosition,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Description of this token as it appears in "found ..." diagnostics
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier '{}'", self.lexeme),
            TokenKind::StringLiteral => format!("string literal \"{}\"", self.lexeme),
            kind => kind.describe().to_string(),
        }
    }
}

/// Lexer for story source
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    /// Create a new lexer for the given source
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the next token, or `None` once the source is exhausted
    pub fn next_token(&mut self) -> Result<Option<Token>, StoryError> {
        self.skip_whitespace();

        if self.is_at_end() {
            return Ok(None);
        }

        let start_pos = self.current_position();
        let ch = self.advance();

        let token = match ch {
            ':' => Token::new(TokenKind::Colon, ":", start_pos),
            '-' => {
                if self.match_char('>') {
                    Token::new(TokenKind::Arrow, "->", start_pos)
                } else {
                    return Err(lexical_error('-', start_pos));
                }
            }
            '"' => self.scan_string(start_pos)?,
            c if is_identifier_start(c) => self.scan_identifier(c, start_pos),
            other => return Err(lexical_error(other, start_pos)),
        };

        Ok(Some(token))
    }

    /// Consume the whole source. Stops at the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, StoryError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn scan_string(&mut self, start_pos: SourcePosition) -> Result<Token, StoryError> {
        let mut value = String::new();

        // No escapes: the first quote after the opening one ends the literal
        while !self.is_at_end() && self.peek() != '"' {
            if matches!(self.peek(), '\n' | '\r') {
                return Err(unterminated_string(start_pos));
            }
            value.push(self.advance());
        }

        if self.is_at_end() {
            return Err(unterminated_string(start_pos));
        }

        self.advance(); // Closing quote
        Ok(Token::new(TokenKind::StringLiteral, value, start_pos))
    }

    fn scan_identifier(&mut self, first: char, start_pos: SourcePosition) -> Token {
        let mut word = first.to_string();

        while !self.is_at_end() && is_identifier_continue(self.peek()) {
            word.push(self.advance());
        }

        let kind = match word.as_str() {
            "scene" => TokenKind::SceneKeyword,
            "text" => TokenKind::TextKeyword,
            "choice" => TokenKind::ChoiceKeyword,
            _ => TokenKind::Identifier,
        };

        Token::new(kind, word, start_pos)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.new_line();
                }
                '\r' => {
                    // CRLF counts as a single line break
                    self.advance();
                    if !self.is_at_end() && self.peek() == '\n' {
                        self.advance();
                    }
                    self.new_line();
                }
                _ => break,
            }
        }
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.position]
        }
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.position];
        self.position += 1;
        self.column += 1;
        ch
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.position] != expected {
            false
        } else {
            self.position += 1;
            self.column += 1;
            true
        }
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }
}

/// Convert story source into its token sequence
pub fn scan(source: &str) -> Result<Vec<Token>, StoryError> {
    Lexer::new(source).tokenize()
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
