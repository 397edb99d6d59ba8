//! Code generation error types.
//!
//! This module defines [`CodegenError`], which represents errors that can
//! occur while lowering the AST to LLVM IR.

/// An error that occurred during code generation.
///
/// Contains a human-readable message and optionally the 1-based source
/// line where the error occurred. Semantic errors (undefined names, type
/// mismatches, return checks) carry a line; module-level failures such as
/// verification do not.
#[derive(Debug)]
pub struct CodegenError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based source line where the error occurred, if known.
    pub line: Option<usize>,
}

impl CodegenError {
    /// Creates a new error with a message and source line.
    pub(super) fn new(message: impl Into<String>, line: usize) -> Self {
        CodegenError {
            message: message.into(),
            line: Some(line),
        }
    }

    /// Creates a new error with only a message.
    pub(super) fn without_line(message: impl Into<String>) -> Self {
        CodegenError {
            message: message.into(),
            line: None,
        }
    }

    /// Creates an error for a name that resolves to nothing.
    pub(super) fn undefined_variable(name: &str, line: usize) -> Self {
        CodegenError::new(format!("Undefined variable '{}'", name), line)
    }

    /// Creates an error for an LLVM builder failure. These indicate a
    /// compiler bug rather than a problem in the source program.
    pub(super) fn builder(what: &str, detail: impl std::fmt::Display, line: usize) -> Self {
        CodegenError::new(format!("Failed to build {}: {}", what, detail), line)
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for CodegenError {}
