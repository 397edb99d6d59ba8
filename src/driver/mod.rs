//! Compilation pipeline orchestration.
//!
//! The driver reads a `.slg` source file, runs the lexer, parser, and
//! code generator in sequence, and writes the resulting native object
//! file. Each phase owns its output and hands it to the next by move;
//! the first error aborts the pipeline.

use inkwell::context::Context;
use slug::ast::AstPrinter;
use slug::codegen::{Codegen, CodegenError};
use slug::lexer::{LexError, Lexer};
use slug::parser::{ParseError, Parser};
use std::path::{Path, PathBuf};

/// A compilation error from any phase of the compiler.
///
/// This enum unifies errors from I/O, lexing, parsing, and code
/// generation to simplify error handling in the build pipeline.
pub(crate) enum CompileError {
    /// The input file does not carry the `.slg` extension.
    InvalidExtension { path: String },
    /// Failed to read a source file.
    FileReadError {
        path: String,
        source: std::io::Error,
    },
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during code generation.
    Codegen(CodegenError),
}

impl CompileError {
    /// The 1-based source line this error points at, if known.
    pub(crate) fn line(&self) -> Option<usize> {
        match self {
            CompileError::InvalidExtension { .. } | CompileError::FileReadError { .. } => None,
            CompileError::Lex(e) => Some(e.line),
            CompileError::Parse(e) => Some(e.line),
            CompileError::Codegen(e) => e.line,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::InvalidExtension { path } => {
                write!(f, "Incorrect file extension: '{}' (expected .slg)", path)
            }
            CompileError::FileReadError { path, source } => {
                write!(f, "Failed to read file '{}': {}", path, source)
            }
            CompileError::Lex(e) => write!(f, "{}", e),
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::Codegen(e) => write!(f, "{}", e),
        }
    }
}

/// A compilation error with the filename and source needed for reporting.
pub(crate) struct CompileErrorWithContext {
    filename: String,
    source: String,
    error: CompileError,
}

impl CompileErrorWithContext {
    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn error(&self) -> &CompileError {
        &self.error
    }
}

/// Wraps an error with its reporting context.
fn with_context(
    filename: &str,
    source: &str,
    error: CompileError,
) -> Box<CompileErrorWithContext> {
    Box::new(CompileErrorWithContext {
        filename: filename.to_string(),
        source: source.to_string(),
        error,
    })
}

/// Derives the default object file path from the input path.
///
/// `hello.slg` becomes `hello.o`, keeping the input's directory.
fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("o")
}

/// Builds a Slug source file into a native object file.
///
/// This function orchestrates the entire compilation pipeline:
///
/// 1. Check the `.slg` extension and read the source file
/// 2. Lex the source into tokens
/// 3. Parse the tokens into an AST (optionally pretty-printing it)
/// 4. Lower the AST to LLVM IR and verify the module
/// 5. Write the object file for the host target
///
/// # Arguments
///
/// * `file` - Path to the Slug source file
/// * `output` - Optional path for the object file. If `None`, the input
///   path with an `.o` extension is used.
/// * `print_ast` - Print the parsed AST to stdout before code generation
pub(crate) fn build(
    file: &str,
    output: Option<&str>,
    print_ast: bool,
) -> Result<(), Box<CompileErrorWithContext>> {
    let input_path = Path::new(file);
    if input_path.extension().and_then(|ext| ext.to_str()) != Some("slg") {
        return Err(with_context(
            file,
            "",
            CompileError::InvalidExtension {
                path: file.to_string(),
            },
        ));
    }

    let source = std::fs::read_to_string(file).map_err(|e| {
        with_context(
            file,
            "",
            CompileError::FileReadError {
                path: file.to_string(),
                source: e,
            },
        )
    })?;

    let mut lexer = Lexer::new(&source);
    let tokens = lexer
        .tokenize()
        .map_err(|e| with_context(file, &source, CompileError::Lex(e)))?;

    let mut parser = Parser::new(tokens);
    let program = parser
        .parse()
        .map_err(|e| with_context(file, &source, CompileError::Parse(e)))?;

    if print_ast {
        print!("{}", AstPrinter::print(&program));
    }

    let module_name = input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("slug_module");

    let llvm_context = Context::create();
    let mut codegen = Codegen::new(&llvm_context, module_name);
    codegen
        .compile(&program)
        .map_err(|e| with_context(file, &source, CompileError::Codegen(e)))?;

    let output_path = match output {
        Some(path) => PathBuf::from(path),
        None => default_output_path(input_path),
    };
    codegen
        .write_object_file(&output_path)
        .map_err(|e| with_context(file, &source, CompileError::Codegen(e)))?;

    println!("Wrote: {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("examples/hello.slg")),
            PathBuf::from("examples/hello.o")
        );
    }

    #[test]
    fn test_invalid_extension_display() {
        let err = CompileError::InvalidExtension {
            path: "hello.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Incorrect file extension: 'hello.txt' (expected .slg)"
        );
    }

    #[test]
    fn test_build_rejects_wrong_extension() {
        let result = build("hello.txt", None, false);
        let err = result.err().expect("expected an error");
        assert!(matches!(
            err.error(),
            CompileError::InvalidExtension { .. }
        ));
    }

    #[test]
    fn test_build_reports_missing_file() {
        let result = build("definitely_missing.slg", None, false);
        let err = result.err().expect("expected an error");
        assert!(matches!(err.error(), CompileError::FileReadError { .. }));
    }
}
