//! Declaration and statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{FnParam, Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single declaration or statement.
    ///
    /// When no declaration keyword matches, parsing falls through to an
    /// assignment (one token of lookahead for `IDENT "="`) or a plain
    /// expression statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// declaration → fn_decl | let_decl | return_stmt | expr_stmt
    /// ```
    pub(super) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Fn => self.parse_fn_decl(),
            TokenKind::Let => self.parse_let_decl(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::Identifier if self.peek_next_kind() == Some(TokenKind::Equal) => {
                self.parse_assign_stmt()
            }
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses a function declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_decl → "fn" IDENT "(" ( param ( "," param )* )? ")" ":" type block
    /// param   → IDENT ":" type
    /// ```
    pub(super) fn parse_fn_decl(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.consume(TokenKind::Fn, "Expected 'fn' keyword")?;

        let name = self.expect_identifier("Expected function name")?;

        self.consume(TokenKind::LeftParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let param_name = self.expect_identifier("Expected parameter name")?;
                self.consume(TokenKind::Colon, "Expected ':' after parameter name")?;
                let param_type = self.parse_type()?;
                params.push(FnParam {
                    name: param_name,
                    ty: param_type,
                });

                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expected ')' after parameters")?;

        self.consume(TokenKind::Colon, "Expected ':' before return type")?;
        let return_type = self.parse_type()?;

        let body = self.parse_block()?;

        Ok(Stmt::new(
            StmtKind::Fn {
                name,
                params,
                return_type,
                body: Box::new(body),
            },
            line,
        ))
    }

    /// Parses a braced block.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" declaration* "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.consume(TokenKind::LeftBrace, "Expected '{'")?;

        let mut stmts = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_eof() {
            stmts.push(self.parse_declaration()?);
        }

        self.consume(TokenKind::RightBrace, "Expected '}'")?;

        Ok(Stmt::new(StmtKind::Block(stmts), line))
    }

    /// Parses a variable declaration.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_decl → "let" "mut"? IDENT ":" type "=" expr ";"
    /// ```
    pub(super) fn parse_let_decl(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.consume(TokenKind::Let, "Expected 'let' keyword")?;

        let mutable = self.match_kind(TokenKind::Mut);

        let name = self.expect_identifier("Expected variable name")?;

        self.consume(TokenKind::Colon, "Expected ':' after variable name")?;
        let ty = self.parse_type()?;

        self.consume(TokenKind::Equal, "Expected '=' after type")?;
        let init = self.parse_expr()?;

        self.consume(TokenKind::Semicolon, "Expected ';'")?;

        Ok(Stmt::new(
            StmtKind::Let {
                name,
                mutable,
                ty,
                init: Some(init),
            },
            line,
        ))
    }

    /// Parses a reassignment statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assign_stmt → IDENT "=" expr ";"
    /// ```
    pub(super) fn parse_assign_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let name = self.expect_identifier("Expected variable name")?;
        self.consume(TokenKind::Equal, "Expected '='")?;
        let value = self.parse_expr()?;
        self.consume(TokenKind::Semicolon, "Expected ';'")?;

        Ok(Stmt::new(StmtKind::Assign { name, value }, line))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr? ";"
    /// ```
    pub(super) fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        self.consume(TokenKind::Return, "Expected 'return' keyword")?;

        if self.match_kind(TokenKind::Semicolon) {
            return Ok(Stmt::new(StmtKind::Return(None), line));
        }

        let value = self.parse_expr()?;
        self.consume(TokenKind::Semicolon, "Expected ';'")?;

        Ok(Stmt::new(StmtKind::Return(Some(value)), line))
    }

    /// Parses an expression statement.
    ///
    /// The expression is evaluated for its side effects and the result is
    /// discarded.
    pub(super) fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let expr = self.parse_expr()?;
        self.consume(TokenKind::Semicolon, "Expected ';'")?;

        Ok(Stmt::new(StmtKind::Expr(expr), line))
    }
}
