//! Expression nodes for the Slug AST.

use std::fmt;

use crate::token::Literal;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/`.
    Div,
    /// Modulo `%`.
    Mod,
    /// Equality `==`.
    Eq,
    /// Inequality `!=`.
    Neq,
    /// Less than `<`.
    Lt,
    /// Less than or equal `<=`.
    Lte,
    /// Greater than `>`.
    Gt,
    /// Greater than or equal `>=`.
    Gte,
}

/// Displays the operator as it appears in Slug source code.
impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
        };
        write!(f, "{}", symbol)
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation `-`.
    Negate,
    /// Logical negation `!`.
    Not,
}

/// Displays the operator as it appears in Slug source code.
impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        };
        write!(f, "{}", symbol)
    }
}

/// The kind of an expression, without source location information.
///
/// Use [`Expr`] for the full AST node with its line.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A literal value (integer, float, or boolean).
    Literal(Literal),

    /// A variable reference by name.
    ///
    /// The name must resolve to a binding during lowering; referencing an
    /// undefined name is a fatal error there, not here.
    Variable(String),

    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        lhs: Box<Expr>,
        /// The right operand.
        rhs: Box<Expr>,
    },

    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expr>,
    },

    /// A function call expression.
    Call {
        /// The name of the function being called.
        callee: String,
        /// The arguments passed to the function, in source order.
        args: Vec<Expr>,
    },
}

/// An expression in the Slug language with its source line.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The 1-based source line this expression starts on.
    pub line: usize,
}

impl Expr {
    /// Creates a new expression with the given kind and line.
    pub fn new(kind: ExprKind, line: usize) -> Self {
        Expr { kind, line }
    }
}
