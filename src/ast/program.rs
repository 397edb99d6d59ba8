//! Top-level program structure for the Slug AST.

use super::stmt::Stmt;

/// The root node of a Slug program's AST.
///
/// A `Program` is the ordered sequence of top-level statements. The
/// grammar admits any declaration here; lowering enforces that only
/// function declarations and `let` declarations appear at the top level,
/// and that exactly one `fn main(): void` exists.
#[derive(Debug)]
pub struct Program {
    /// The top-level statements, in source order.
    pub stmts: Vec<Stmt>,
}
