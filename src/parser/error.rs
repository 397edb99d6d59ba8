//! Parse error types.

/// An error that occurred during parsing.
///
/// `ParseError` contains a human-readable message and the 1-based source
/// line where the error occurred.
///
/// # See Also
///
/// * [`crate::lexer::LexError`] - Similar error type for lexical errors
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based source line where the error occurred.
    pub line: usize,
}

impl ParseError {
    /// Creates a new parse error.
    pub(super) fn new(message: impl Into<String>, line: usize) -> Self {
        ParseError {
            message: message.into(),
            line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parser error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
