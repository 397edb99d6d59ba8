//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token types from
//! the input: punctuation, one-or-two-character operators, number
//! literals, identifiers, and keywords.

use super::Lexer;
use super::error::LexError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a single token starting at the current position.
    ///
    /// Returns `Ok(None)` when the scanned character was whitespace (or a
    /// newline, which only bumps the line counter) and produced no token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the character cannot start any token.
    pub(super) fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        // `tokenize` only calls this before EOF, so a character is present.
        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            ' ' | '\r' | '\t' | '\n' => return Ok(None),

            '(' => self.make_token(TokenKind::LeftParen, None),
            ')' => self.make_token(TokenKind::RightParen, None),
            '{' => self.make_token(TokenKind::LeftBrace, None),
            '}' => self.make_token(TokenKind::RightBrace, None),
            ',' => self.make_token(TokenKind::Comma, None),
            '.' => self.make_token(TokenKind::Dot, None),
            ';' => self.make_token(TokenKind::Semicolon, None),
            ':' => self.make_token(TokenKind::Colon, None),

            '!' => self.one_or_two(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.one_or_two(TokenKind::Equal, TokenKind::EqualEqual),
            '+' => self.one_or_two(TokenKind::Plus, TokenKind::PlusEqual),
            '-' => self.one_or_two(TokenKind::Minus, TokenKind::MinusEqual),
            '*' => self.one_or_two(TokenKind::Star, TokenKind::StarEqual),
            '/' => self.one_or_two(TokenKind::Slash, TokenKind::SlashEqual),
            '%' => self.one_or_two(TokenKind::Percent, TokenKind::PercentEqual),
            '<' => self.one_or_two(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.one_or_two(TokenKind::Greater, TokenKind::GreaterEqual),

            _ if c.is_ascii_digit() => self.read_number()?,
            _ if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(),

            _ => return Err(LexError::unexpected_character(c, self.line)),
        };

        Ok(Some(token))
    }

    /// Builds the two-character token if the next character is `=`,
    /// otherwise the one-character token.
    fn one_or_two(&mut self, bare: TokenKind, with_equal: TokenKind) -> Token {
        let kind = if self.match_char('=') { with_equal } else { bare };
        self.make_token(kind, None)
    }

    /// Reads a numeric literal.
    ///
    /// The first digit has already been consumed. A dot followed by at
    /// least one digit turns the literal into a float; a bare trailing
    /// dot is left for the next token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the integer does not fit in an `i32` or
    /// the float fails to parse.
    fn read_number(&mut self) -> Result<Token, LexError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance(); // consume '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.input[self.start..self.pos];

        if is_float {
            let value: f64 = lexeme
                .parse()
                .map_err(|_| LexError::invalid_float_literal(lexeme, self.line))?;
            Ok(self.make_token(TokenKind::Number, Some(Literal::Float(value))))
        } else {
            let value: i32 = lexeme
                .parse()
                .map_err(|_| LexError::invalid_integer_literal(lexeme, self.line))?;
            Ok(self.make_token(TokenKind::Number, Some(Literal::Int(value))))
        }
    }

    /// Reads an identifier or keyword.
    ///
    /// The first character has already been consumed. Identifiers are
    /// `[A-Za-z_][A-Za-z0-9_]*`; `fn`, `let`, `mut`, and `return` become
    /// keyword tokens, `true` and `false` become boolean literals.
    fn read_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let lexeme = &self.input[self.start..self.pos];
        match lexeme {
            "fn" => self.make_token(TokenKind::Fn, None),
            "let" => self.make_token(TokenKind::Let, None),
            "mut" => self.make_token(TokenKind::Mut, None),
            "return" => self.make_token(TokenKind::Return, None),
            "true" => self.make_token(TokenKind::True, Some(Literal::Bool(true))),
            "false" => self.make_token(TokenKind::False, Some(Literal::Bool(false))),
            _ => self.make_token(TokenKind::Identifier, None),
        }
    }
}
