//! Module-scope `let` lowering.
//!
//! Top-level variables become LLVM globals. Their initializers are folded
//! at compile time; no runtime computation happens at module scope.

use super::Codegen;
use super::binding::Binding;
use super::error::CodegenError;
use crate::ast::{Expr, ExprKind, Type, UnaryOp};
use crate::token::Literal;
use inkwell::module::Linkage;
use inkwell::values::BasicValueEnum;

/// The source-level type a literal carries.
fn literal_type(literal: &Literal) -> Type {
    match literal {
        Literal::Int(_) => Type::I32,
        Literal::Float(_) => Type::F64,
        Literal::Bool(_) => Type::Bool,
    }
}

impl<'ctx> Codegen<'ctx> {
    /// Lowers a top-level `let` into a global variable.
    ///
    /// The initializer must fold to a constant. The emitted global has
    /// external linkage and is marked constant exactly when the binding is
    /// not `mut`. Immutable globals are bound as their folded constant and
    /// used directly; mutable globals are bound as a slot so reads load
    /// through the global's address and assignments store through it.
    pub(super) fn lower_global_let(
        &mut self,
        name: &str,
        mutable: bool,
        ty: Type,
        init: Option<&Expr>,
        line: usize,
    ) -> Result<(), CodegenError> {
        let basic_ty = self.basic_type(ty, line)?;

        let value = match init {
            Some(expr) => self.fold_constant(name, expr, ty)?,
            None => basic_ty.const_zero(),
        };

        let global = self.module.add_global(basic_ty, None, name);
        global.set_linkage(Linkage::External);
        global.set_initializer(&value);
        global.set_constant(!mutable);

        let binding = if mutable {
            Binding::slot(global.as_pointer_value(), true, ty)
        } else {
            Binding::value(value, ty)
        };
        self.scopes.declare(name, binding);

        Ok(())
    }

    /// Folds a module-scope initializer to a constant value.
    ///
    /// Literals fold directly; unary minus and not fold through a literal
    /// operand. Anything else requires runtime computation and is a fatal
    /// error at module scope.
    fn fold_constant(
        &self,
        name: &str,
        expr: &Expr,
        declared: Type,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let literal = self.fold_literal(name, expr)?;

        let folded_ty = literal_type(&literal);
        if folded_ty != declared {
            return Err(CodegenError::new(
                format!(
                    "Type mismatch in global '{}': initializer is '{}' but declared type is '{}'",
                    name, folded_ty, declared
                ),
                expr.line,
            ));
        }

        Ok(self.constant_literal(literal))
    }

    /// Evaluates an initializer expression down to a literal.
    fn fold_literal(&self, name: &str, expr: &Expr) -> Result<Literal, CodegenError> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(*literal),
            ExprKind::Unary { op, operand } => {
                let inner = self.fold_literal(name, operand)?;
                match (op, inner) {
                    (UnaryOp::Negate, Literal::Int(v)) => Ok(Literal::Int(v.wrapping_neg())),
                    (UnaryOp::Negate, Literal::Float(v)) => Ok(Literal::Float(-v)),
                    (UnaryOp::Not, Literal::Bool(v)) => Ok(Literal::Bool(!v)),
                    _ => Err(CodegenError::new(
                        format!(
                            "Operator '{}' cannot be applied to the initializer of global '{}'",
                            op, name
                        ),
                        expr.line,
                    )),
                }
            }
            _ => Err(CodegenError::new(
                format!(
                    "Initializer of global '{}' must be a constant expression",
                    name
                ),
                expr.line,
            )),
        }
    }
}
