//! Statement nodes for the Slug AST.

use super::expr::Expr;
use super::types::Type;

/// A function parameter: a name and its declared type.
#[derive(Debug, Clone)]
pub struct FnParam {
    /// The parameter name.
    pub name: String,
    /// The declared parameter type.
    pub ty: Type,
}

/// The kind of a statement, without source location information.
///
/// Use [`Stmt`] for the full AST node with its line.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects. The result value
    /// (if any) is discarded.
    Expr(Expr),

    /// A braced block of statements, introducing a lexical scope.
    Block(Vec<Stmt>),

    /// A function declaration.
    Fn {
        /// The function name.
        name: String,
        /// The parameters, in source order.
        params: Vec<FnParam>,
        /// The declared return type.
        return_type: Type,
        /// The function body. Always a [`StmtKind::Block`].
        body: Box<Stmt>,
    },

    /// A variable declaration with `let`.
    Let {
        /// The name of the variable being declared.
        name: String,
        /// Whether this binding is declared as mutable (`let mut`).
        mutable: bool,
        /// The declared type.
        ty: Type,
        /// The initializer expression.
        ///
        /// The grammar always supplies one; `None` is only reachable for
        /// constructed ASTs and zero-initializes the variable.
        init: Option<Expr>,
    },

    /// A reassignment of a mutable variable: `name = value;`.
    Assign {
        /// The name of the variable being assigned.
        name: String,
        /// The value expression.
        value: Expr,
    },

    /// A return statement.
    ///
    /// `return;` is represented as `None`, `return expr;` as `Some(expr)`.
    Return(Option<Expr>),
}

/// A statement in the Slug language with its source line.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The 1-based source line this statement starts on.
    pub line: usize,
}

impl Stmt {
    /// Creates a new statement with the given kind and line.
    pub fn new(kind: StmtKind, line: usize) -> Self {
        Stmt { kind, line }
    }
}
