//! Unit tests for the parser module.

use super::*;
use crate::ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, Type, UnaryOp};
use crate::lexer::Lexer;
use crate::token::Literal;

/// Lexes and parses a source string.
pub(super) fn parse(source: &str) -> Result<Program, ParseError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexing failed for input {:?}: {}", source, e));
    Parser::new(tokens).parse()
}

/// Parses a source string, panicking on failure.
pub(super) fn parse_ok(source: &str) -> Program {
    parse(source).unwrap_or_else(|e| panic!("Parsing failed for input {:?}: {}", source, e))
}

/// Parses a source string and returns the error.
pub(super) fn parse_error(source: &str) -> ParseError {
    match parse(source) {
        Ok(_) => panic!("Expected parsing to fail for input {:?}", source),
        Err(e) => e,
    }
}

/// Parses `<expr>;` as a program and returns the expression.
pub(super) fn parse_first_expr(source: &str) -> Expr {
    let program = parse_ok(&format!("{};", source));
    match program.stmts.into_iter().next() {
        Some(Stmt {
            kind: StmtKind::Expr(expr),
            ..
        }) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

mod errors;
mod stmt;
