//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token.
    pub(super) fn token_display(token: &Token) -> String {
        match token.kind {
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Identifier => format!("identifier '{}'", token.lexeme),
            TokenKind::Number => format!("number '{}'", token.lexeme),
            _ => format!("'{}'", token.lexeme),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time; if the position is past
    /// the end, it returns the last token (which is `Eof`).
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty and advance() never moves past
        // Eof, so the index is always valid.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the line of the current token.
    pub(super) fn current_line(&self) -> usize {
        self.current().line
    }

    /// Returns the kind of the token after the current one, if any.
    pub(super) fn peek_next_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos + 1).map(|token| token.kind)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// Returns `true` if the token matched and was consumed.
    pub(super) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to have kind `expected`, consumes it, and
    /// returns a clone of it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying `message` if the current token
    /// does not match.
    pub(super) fn consume(
        &mut self,
        expected: TokenKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(expected) {
            let token = self.current().clone();
            self.advance();
            Ok(token)
        } else {
            Err(ParseError::new(
                format!("{}, found {}", message, Self::token_display(self.current())),
                self.current_line(),
            ))
        }
    }

    /// Expects an identifier token and returns its lexeme.
    pub(super) fn expect_identifier(&mut self, message: &str) -> Result<String, ParseError> {
        Ok(self.consume(TokenKind::Identifier, message)?.lexeme)
    }
}
