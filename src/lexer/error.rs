//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can
//! occur during tokenization.

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the 1-based source
/// line where the error occurred, enabling rich error reporting with
/// tools like [`ariadne`].
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based source line where the error occurred.
    pub line: usize,
}

impl LexError {
    /// Creates an error for a character no token can start with.
    pub(super) fn unexpected_character(c: char, line: usize) -> Self {
        LexError {
            message: format!("Unexpected character: {}", c),
            line,
        }
    }

    /// Creates an error for an integer literal outside the `i32` range.
    pub(super) fn invalid_integer_literal(lexeme: &str, line: usize) -> Self {
        LexError {
            message: format!("Integer literal '{}' does not fit in 32 bits", lexeme),
            line,
        }
    }

    /// Creates an error for an unparsable float literal.
    pub(super) fn invalid_float_literal(lexeme: &str, line: usize) -> Self {
        LexError {
            message: format!("Invalid float literal '{}'", lexeme),
            line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}
