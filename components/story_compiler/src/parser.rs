//! Recursive descent parser for story scripts
//!
//! Grammar:
//!
//! ```text
//! Story  := Scene*
//! Scene  := 'scene' ':' IDENTIFIER 'text' ':' STRING Choice*
//! Choice := 'choice' ':' STRING '->' IDENTIFIER
//! ```
//!
//! One token of lookahead, no backtracking. The same pass that checks the
//! grammar extracts the scenes, so grammar and extraction cannot drift apart.

use crate::error::{unexpected_eof, unexpected_token};
use crate::lexer::{Token, TokenKind};
use story_types::{Choice, Scene, SourcePosition, StoryError};

/// A scene as declared in the source, before semantic validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScene {
    /// The extracted scene
    pub scene: Scene,
    /// Position of the scene's `scene` keyword
    pub position: SourcePosition,
}

/// Story parser over a scanned token sequence
pub struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
}

impl<'t> Parser<'t> {
    /// Create a parser positioned at the first token
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the whole token sequence into declared scenes, in source order
    pub fn parse_story(&mut self) -> Result<Vec<ParsedScene>, StoryError> {
        let mut scenes = Vec::new();

        // No end marker: the story ends when the tokens do
        while !self.is_at_end() {
            scenes.push(self.parse_scene()?);
        }

        tracing::trace!(scenes = scenes.len(), "story grammar accepted");
        Ok(scenes)
    }

    fn parse_scene(&mut self) -> Result<ParsedScene, StoryError> {
        let position = self.expect(TokenKind::SceneKeyword, "'scene'")?.position;
        self.expect(TokenKind::Colon, "':' after 'scene'")?;
        let id = self.expect_identifier("scene identifier")?;

        self.expect(TokenKind::TextKeyword, "'text'")?;
        self.expect(TokenKind::Colon, "':' after 'text'")?;
        let text = self.expect_string("scene narrative (quoted string)")?;

        let mut scene = Scene::new(id, text);
        while self.check(TokenKind::ChoiceKeyword) {
            scene.choices.push(self.parse_choice()?);
        }

        Ok(ParsedScene { scene, position })
    }

    fn parse_choice(&mut self) -> Result<Choice, StoryError> {
        self.expect(TokenKind::ChoiceKeyword, "'choice'")?;
        self.expect(TokenKind::Colon, "':' after 'choice'")?;
        let label = self.expect_string("choice label (quoted string)")?;
        self.expect(TokenKind::Arrow, "'->' after choice label")?;
        let destination = self.expect_identifier("destination scene identifier")?;

        Ok(Choice { label, destination })
    }

    // Helper methods

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn check(&self, kind: TokenKind) -> bool {
        matches!(self.tokens.get(self.current), Some(token) if token.kind == kind)
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'t Token, StoryError> {
        let tokens = self.tokens;
        match tokens.get(self.current) {
            Some(token) if token.kind == kind => {
                self.current += 1;
                Ok(token)
            }
            Some(token) => Err(unexpected_token(expected, &token.describe(), token.position)),
            None => Err(unexpected_eof(expected, self.end_position())),
        }
    }

    fn expect_identifier(&mut self, expected: &str) -> Result<String, StoryError> {
        Ok(self.expect(TokenKind::Identifier, expected)?.lexeme.clone())
    }

    fn expect_string(&mut self, expected: &str) -> Result<String, StoryError> {
        Ok(self.expect(TokenKind::StringLiteral, expected)?.lexeme.clone())
    }

    fn end_position(&self) -> Option<SourcePosition> {
        self.tokens.last().map(|token| token.position)
    }
}

/// Check a token sequence against the story grammar without keeping the result
pub fn parse(tokens: &[Token]) -> Result<(), StoryError> {
    Parser::new(tokens).parse_story().map(|_| ())
}
