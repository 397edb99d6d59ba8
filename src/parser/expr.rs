//! Expression parsing using precedence climbing (Pratt parsing).
//!
//! This module implements expression parsing with proper operator
//! precedence. The parser handles:
//! - Primary expressions (literals, variables, calls, parenthesized
//!   expressions)
//! - Right-recursive unary operators
//! - Binary operations with correct precedence and left-associativity

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::token::TokenKind;

/// Operator precedence levels (higher number = tighter binding).
///
/// - Level 6: `*`, `/`, `%` (multiplicative)
/// - Level 5: `+`, `-` (additive)
/// - Level 4: `<`, `<=`, `>`, `>=` (comparison)
/// - Level 3: `==`, `!=` (equality)
///
/// Unary `-` and `!` bind tighter than any binary operator and are
/// handled by [`Parser::parse_unary`] rather than the table.
const PRECEDENCE_MULTIPLICATIVE: u8 = 6;
const PRECEDENCE_ADDITIVE: u8 = 5;
const PRECEDENCE_COMPARISON: u8 = 4;
const PRECEDENCE_EQUALITY: u8 = 3;

/// Lowest precedence accepted by the climbing loop; every binary operator
/// binds at least this tightly.
const PRECEDENCE_LOWEST: u8 = PRECEDENCE_EQUALITY;

/// Returns the precedence and operator for a binary operator token.
///
/// Returns `None` for non-operator tokens.
fn binary_op(kind: TokenKind) -> Option<(u8, BinaryOp)> {
    match kind {
        TokenKind::Star => Some((PRECEDENCE_MULTIPLICATIVE, BinaryOp::Mul)),
        TokenKind::Slash => Some((PRECEDENCE_MULTIPLICATIVE, BinaryOp::Div)),
        TokenKind::Percent => Some((PRECEDENCE_MULTIPLICATIVE, BinaryOp::Mod)),
        TokenKind::Plus => Some((PRECEDENCE_ADDITIVE, BinaryOp::Add)),
        TokenKind::Minus => Some((PRECEDENCE_ADDITIVE, BinaryOp::Sub)),
        TokenKind::Less => Some((PRECEDENCE_COMPARISON, BinaryOp::Lt)),
        TokenKind::LessEqual => Some((PRECEDENCE_COMPARISON, BinaryOp::Lte)),
        TokenKind::Greater => Some((PRECEDENCE_COMPARISON, BinaryOp::Gt)),
        TokenKind::GreaterEqual => Some((PRECEDENCE_COMPARISON, BinaryOp::Gte)),
        TokenKind::EqualEqual => Some((PRECEDENCE_EQUALITY, BinaryOp::Eq)),
        TokenKind::BangEqual => Some((PRECEDENCE_EQUALITY, BinaryOp::Neq)),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression.
    ///
    /// This is the main entry point for expression parsing. It handles
    /// operator precedence and associativity correctly.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(PRECEDENCE_LOWEST)
    }

    /// Parses a binary expression with precedence climbing.
    ///
    /// The algorithm:
    /// 1. Parse a unary expression as the left-hand side
    /// 2. While the current token is a binary operator whose precedence is
    ///    at least `min_precedence`, consume it and recursively parse the
    ///    right-hand side at `precedence + 1`
    ///
    /// Parsing the right side one level tighter makes every operator
    /// left-associative: `a - b - c` parses as `(a - b) - c`.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;

        loop {
            let Some((precedence, op)) = binary_op(self.current_kind()) else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            self.advance();

            let rhs = self.parse_binary(precedence + 1)?;

            let line = lhs.line;
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                line,
            );
        }

        Ok(lhs)
    }

    /// Parses a unary expression.
    ///
    /// Prefix `-` and `!` are right-recursive, so `--x` parses as
    /// `-(-x)`, and bind tighter than any binary operator.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Negate,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.parse_primary(),
        };

        let line = self.current_line();
        self.advance();
        let operand = self.parse_unary()?;

        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            line,
        ))
    }

    /// Parses a primary expression (atom).
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary → NUMBER | "true" | "false" | IDENT | call | "(" expr ")"
    /// call    → IDENT "(" ( expr ( "," expr )* )? ")"
    /// ```
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();

        match self.current_kind() {
            TokenKind::Number | TokenKind::True | TokenKind::False => {
                let token = self.current().clone();
                self.advance();
                let literal = token.literal.ok_or_else(|| {
                    ParseError::new(
                        format!("Literal token '{}' is missing its value", token.lexeme),
                        line,
                    )
                })?;
                Ok(Expr::new(ExprKind::Literal(literal), line))
            }
            TokenKind::Identifier => {
                let name = self.current().lexeme.clone();
                self.advance();

                if self.check(TokenKind::LeftParen) {
                    self.parse_call(name, line)
                } else {
                    Ok(Expr::new(ExprKind::Variable(name), line))
                }
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.consume(TokenKind::RightParen, "Expected ')' after expression")?;
                Ok(inner)
            }
            _ => Err(ParseError::new(
                format!(
                    "Expected expression, found {}",
                    Self::token_display(self.current())
                ),
                line,
            )),
        }
    }

    /// Parses a function call expression.
    ///
    /// The callee identifier has already been consumed. This method parses
    /// the argument list within parentheses.
    fn parse_call(&mut self, callee: String, line: usize) -> Result<Expr, ParseError> {
        self.consume(TokenKind::LeftParen, "Expected '(' after function name")?;

        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenKind::RightParen, "Expected ')' after arguments")?;

        Ok(Expr::new(ExprKind::Call { callee, args }, line))
    }
}
