//! Lexical analyzer for the Slug programming language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs a single left-to-right pass with at most two
//! characters of lookahead:
//! - ASCII whitespace (space, carriage return, tab) is skipped
//! - Newlines increment the line counter and are otherwise skipped
//! - Digits start a number, letters and underscores start an identifier
//! - Punctuation and operators are matched directly, with an optional
//!   trailing `=` promoting `! = + - * / % < >` to their two-character forms
//!
//! # Supported Tokens
//!
//! - **Keywords**: `fn`, `let`, `mut`, `return`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Number literals**: `123` (32-bit signed) or `1.5` (64-bit float).
//!   No hex, no exponent, no sign; a leading `-` is a unary operator.
//! - **Boolean literals**: `true` and `false`
//! - **Punctuation**: `( ) { } , . ; :`
//! - **Operators**: `! != = == + += - -= * *= / /= % %= < <= > >=`
//!
//! # Examples
//!
//! ```
//! use slug::lexer::Lexer;
//! use slug::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x: i32 = 5;");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`scan`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod scan;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Literal, Token, TokenKind};

/// A lexical analyzer that tokenizes Slug source code.
///
/// The `Lexer` maintains its position within the input and tracks the
/// current line number for error reporting. It is designed to be used
/// once per source file.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Byte offset where the token currently being scanned starts.
    pub(super) start: usize,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with the line
    /// counter initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            start: 0,
            pos: 0,
            line: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method consumes the input from start to end, producing tokens
    /// until the end of input is reached. The returned vector always ends
    /// with exactly one [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if:
    /// - An unexpected character is encountered
    /// - An integer literal does not fit in 32 signed bits
    /// - A float literal cannot be parsed
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_eof() {
            self.start = self.pos;
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, String::new(), None, self.line));

        Ok(tokens)
    }

    /// Builds a token for the lexeme between `start` and the current
    /// position, carrying an optional literal payload.
    pub(super) fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let lexeme = self.input[self.start..self.pos].to_string();
        Token::new(kind, lexeme, literal, self.line)
    }
}
