//! Integration tests for error reporting across compiler phases.
//!
//! Each phase fails fast with a message carrying the source line; these
//! tests pin the user-visible message formats.

use slug::codegen::Codegen;
use slug::lexer::Lexer;
use slug::parser::Parser;

use inkwell::context::Context;

enum PhaseError {
    Lex(String),
    Parse(String),
    Codegen(String),
}

impl PhaseError {
    fn message(&self) -> &str {
        match self {
            PhaseError::Lex(m) | PhaseError::Parse(m) | PhaseError::Codegen(m) => m,
        }
    }
}

/// Runs the pipeline and reports which phase failed with what message.
fn compile(source: &str) -> Result<(), PhaseError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer
        .tokenize()
        .map_err(|e| PhaseError::Lex(e.to_string()))?;

    let mut parser = Parser::new(tokens);
    let program = parser
        .parse()
        .map_err(|e| PhaseError::Parse(e.to_string()))?;

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "errors_test");
    codegen
        .compile(&program)
        .map_err(|e| PhaseError::Codegen(e.to_string()))?;

    Ok(())
}

fn expect_error(source: &str) -> PhaseError {
    match compile(source) {
        Ok(()) => panic!("Expected compilation of {:?} to fail", source),
        Err(e) => e,
    }
}

#[test]
fn test_lex_error_format() {
    let err = expect_error("fn main(): void {\n    let x: i32 = @;\n}");
    assert!(matches!(err, PhaseError::Lex(_)));
    assert_eq!(err.message(), "[line 2] Unexpected character: @");
}

#[test]
fn test_parse_error_format() {
    let err = expect_error("fn main(): void {\n    let x: i32 = 5\n}");
    assert!(matches!(err, PhaseError::Parse(_)));
    assert!(
        err.message().starts_with("Parser error at line "),
        "{}",
        err.message()
    );
}

#[test]
fn test_undefined_variable_error() {
    let err = expect_error("fn main(): void { let x: i32 = ghost; return; }");
    assert!(matches!(err, PhaseError::Codegen(_)));
    assert!(
        err.message().contains("Undefined variable 'ghost'"),
        "{}",
        err.message()
    );
}

#[test]
fn test_unknown_function_error() {
    let err = expect_error("fn main(): void { ghost(); return; }");
    assert!(
        err.message().contains("Unknown function 'ghost'"),
        "{}",
        err.message()
    );
}

#[test]
fn test_return_type_mismatch_error() {
    let err = expect_error(
        "fn f(): f64 { return 1; }\nfn main(): void { return; }",
    );
    assert!(
        err.message()
            .contains("Type mismatch in function 'f': returning 'i32' but expected 'double'"),
        "{}",
        err.message()
    );
}

#[test]
fn test_non_constant_global_error() {
    let err = expect_error(
        "fn f(): i32 { return 1; }\nlet g: i32 = f();\nfn main(): void { return; }",
    );
    assert!(
        err.message().contains("must be a constant expression"),
        "{}",
        err.message()
    );
}

#[test]
fn test_disallowed_top_level_statement_error() {
    let err = expect_error("1 + 2;\nfn main(): void { return; }");
    assert!(
        err.message()
            .contains("Only function and variable declarations are allowed at the top level"),
        "{}",
        err.message()
    );
}

#[test]
fn test_missing_main_error() {
    let err = expect_error("let x: i32 = 1;");
    assert!(
        err.message().contains("No 'main' function found"),
        "{}",
        err.message()
    );
}

#[test]
fn test_first_error_wins() {
    // The lexer fails before the parser ever sees the missing semicolon.
    let err = expect_error("let x: i32 = 5 $\nfn main(): void { return }");
    assert!(matches!(err, PhaseError::Lex(_)));
}
