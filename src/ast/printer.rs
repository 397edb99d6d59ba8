//! Debug pretty-printer for the Slug AST.
//!
//! Renders a parsed program as an indented tree, one node per line. The
//! output is informative only; nothing downstream consumes it.

use std::fmt::Write;

use super::expr::{Expr, ExprKind};
use super::program::Program;
use super::stmt::{Stmt, StmtKind};

/// Pretty-prints an AST as an indented tree.
///
/// Every node variant is handled by an exhaustive match, so adding a new
/// expression or statement kind fails to compile until the printer learns
/// about it.
pub struct AstPrinter {
    output: String,
    indent: usize,
}

impl AstPrinter {
    /// Renders the program as an indented tree and returns the text.
    pub fn print(program: &Program) -> String {
        let mut printer = AstPrinter {
            output: String::new(),
            indent: 0,
        };
        printer.emit("Program");
        printer.indent += 1;
        for stmt in &program.stmts {
            printer.print_stmt(stmt);
        }
        printer.indent -= 1;
        printer.output
    }

    fn emit(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push_str("  ");
        }
        // Writing to a String cannot fail.
        let _ = writeln!(self.output, "{}", text);
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.emit("ExprStmt");
                self.with_indent(|p| p.print_expr(expr));
            }
            StmtKind::Block(stmts) => {
                self.emit("Block");
                self.with_indent(|p| {
                    for stmt in stmts {
                        p.print_stmt(stmt);
                    }
                });
            }
            StmtKind::Fn {
                name,
                params,
                return_type,
                body,
            } => {
                let params = params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.ty))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.emit(&format!("Fn {}({}): {}", name, params, return_type));
                self.with_indent(|p| p.print_stmt(body));
            }
            StmtKind::Let {
                name,
                mutable,
                ty,
                init,
            } => {
                let mut_prefix = if *mutable { "mut " } else { "" };
                self.emit(&format!("Let {}{}: {}", mut_prefix, name, ty));
                if let Some(init) = init {
                    self.with_indent(|p| p.print_expr(init));
                }
            }
            StmtKind::Assign { name, value } => {
                self.emit(&format!("Assign {}", name));
                self.with_indent(|p| p.print_expr(value));
            }
            StmtKind::Return(value) => {
                self.emit("Return");
                if let Some(value) = value {
                    self.with_indent(|p| p.print_expr(value));
                }
            }
        }
    }

    fn print_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(literal) => {
                self.emit(&format!("Literal {}", literal));
            }
            ExprKind::Variable(name) => {
                self.emit(&format!("Variable {}", name));
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.emit(&format!("Binary {}", op));
                self.with_indent(|p| {
                    p.print_expr(lhs);
                    p.print_expr(rhs);
                });
            }
            ExprKind::Unary { op, operand } => {
                self.emit(&format!("Unary {}", op));
                self.with_indent(|p| p.print_expr(operand));
            }
            ExprKind::Call { callee, args } => {
                self.emit(&format!("Call {}", callee));
                self.with_indent(|p| {
                    for arg in args {
                        p.print_expr(arg);
                    }
                });
            }
        }
    }

    fn with_indent(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }
}
