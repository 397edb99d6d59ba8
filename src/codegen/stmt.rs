//! Statement lowering.
//!
//! This module lowers Slug statements: expression statements, blocks,
//! local `let` declarations, assignments, and returns. Function
//! declarations are handled at the top level by [`Codegen::compile`];
//! encountering one inside a body is an error.

use super::Codegen;
use super::binding::{Binding, Storage};
use super::error::CodegenError;
use crate::ast::{Expr, Stmt, StmtKind, Type};
use inkwell::types::BasicTypeEnum;
use inkwell::values::PointerValue;

impl<'ctx> Codegen<'ctx> {
    /// Lowers a single statement.
    pub(super) fn lower_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                // Evaluated for side effects; the value (if any) is dropped.
                self.lower_expr(expr)?;
                Ok(())
            }
            StmtKind::Block(stmts) => self.lower_block(stmts),
            StmtKind::Let {
                name,
                mutable,
                ty,
                init,
            } => self.lower_local_let(name, *mutable, *ty, init.as_ref(), stmt.line),
            StmtKind::Assign { name, value } => self.lower_assign(name, value, stmt.line),
            StmtKind::Return(value) => self.lower_return(value.as_ref(), stmt.line),
            StmtKind::Fn { .. } => Err(CodegenError::new(
                "Function declarations are only allowed at the top level",
                stmt.line,
            )),
        }
    }

    /// Lowers a block, giving it its own scope frame.
    ///
    /// Statements after a terminator (an early `return`) are unreachable
    /// and skipped rather than emitted into a closed basic block.
    fn lower_block(&mut self, stmts: &[Stmt]) -> Result<(), CodegenError> {
        self.scopes.push();
        let mut result = Ok(());
        for stmt in stmts {
            if self.current_block_terminated() {
                break;
            }
            result = self.lower_stmt(stmt);
            if result.is_err() {
                break;
            }
        }
        self.scopes.pop();
        result
    }

    /// Lowers a local `let` declaration.
    ///
    /// The stack slot is always allocated in the function's entry block,
    /// regardless of where the `let` appears textually, so every alloca
    /// dominates every use. The initializer is lowered at the current
    /// insertion point and stored into the slot; a missing initializer
    /// (not reachable from the grammar) stores a zero value.
    fn lower_local_let(
        &mut self,
        name: &str,
        mutable: bool,
        ty: Type,
        init: Option<&Expr>,
        line: usize,
    ) -> Result<(), CodegenError> {
        let basic_ty = self.basic_type(ty, line)?;
        let slot = self.entry_block_alloca(basic_ty, name, line)?;

        let value = match init {
            Some(expr) => {
                let value = self.lower_expr_value(expr)?;
                if value.get_type() != basic_ty {
                    return Err(CodegenError::new(
                        format!(
                            "Type mismatch in variable '{}': initializer is '{}' but expected '{}'",
                            name,
                            Self::type_name(value.get_type()),
                            Self::type_name(basic_ty),
                        ),
                        line,
                    ));
                }
                value
            }
            None => basic_ty.const_zero(),
        };

        self.builder
            .build_store(slot, value)
            .map_err(|e| CodegenError::builder("store", e, line))?;

        self.scopes.declare(name, Binding::slot(slot, mutable, ty));

        Ok(())
    }

    /// Lowers an assignment to a mutable binding.
    ///
    /// The target must resolve to a mutable slot; assigning to an
    /// immutable binding, a parameter, or a function is a fatal error, as
    /// is storing a value of the wrong IR type.
    fn lower_assign(&mut self, name: &str, value: &Expr, line: usize) -> Result<(), CodegenError> {
        let value = self.lower_expr_value(value)?;

        let binding = *self
            .scopes
            .lookup(name)
            .ok_or_else(|| CodegenError::undefined_variable(name, line))?;

        let slot = match binding.storage {
            Storage::Slot(ptr) if binding.mutable => ptr,
            Storage::Slot(_) | Storage::Value(_) => {
                return Err(CodegenError::new(
                    format!("Cannot assign to immutable variable '{}'", name),
                    line,
                ));
            }
            Storage::Function(_) => {
                return Err(CodegenError::new(
                    format!("Cannot assign to function '{}'", name),
                    line,
                ));
            }
        };

        let expected = self.basic_type(binding.ty, line)?;
        if value.get_type() != expected {
            return Err(CodegenError::new(
                format!(
                    "Type mismatch in assignment to '{}': value is '{}' but expected '{}'",
                    name,
                    Self::type_name(value.get_type()),
                    Self::type_name(expected),
                ),
                line,
            ));
        }

        self.builder
            .build_store(slot, value)
            .map_err(|e| CodegenError::builder("store", e, line))?;

        Ok(())
    }

    /// Lowers a return statement.
    ///
    /// Returning a value from a void function is fatal, and the value's
    /// IR type must equal the function's IR return type exactly. A bare
    /// `return` in a non-void function is fatal unless the function is
    /// `main`, which returns 0.
    fn lower_return(&mut self, value: Option<&Expr>, line: usize) -> Result<(), CodegenError> {
        let current = self.current_fn.as_ref().ok_or_else(|| {
            CodegenError::new("'return' outside of a function", line)
        })?;
        let function = current.value;
        let fn_name = current.name.clone();
        let declared = current.return_type;

        match value {
            Some(expr) => {
                if declared == Type::Void {
                    return Err(CodegenError::new(
                        "cannot return a value from a void function.",
                        line,
                    ));
                }

                let value = self.lower_expr_value(expr)?;
                let expected = function.get_type().get_return_type().ok_or_else(|| {
                    CodegenError::new(
                        format!("Function '{}' has no IR return type", fn_name),
                        line,
                    )
                })?;
                if value.get_type() != expected {
                    return Err(CodegenError::new(
                        format!(
                            "Type mismatch in function '{}': returning '{}' but expected '{}'",
                            fn_name,
                            Self::type_name(value.get_type()),
                            Self::type_name(expected),
                        ),
                        line,
                    ));
                }

                self.builder
                    .build_return(Some(&value))
                    .map_err(|e| CodegenError::builder("return", e, line))?;
            }
            None => {
                if fn_name == "main" {
                    let zero = self.context.i32_type().const_int(0, false);
                    self.builder
                        .build_return(Some(&zero))
                        .map_err(|e| CodegenError::builder("return", e, line))?;
                } else if declared == Type::Void {
                    self.builder
                        .build_return(None)
                        .map_err(|e| CodegenError::builder("return", e, line))?;
                } else {
                    return Err(CodegenError::new(
                        "Empty return in function with non-void return type.",
                        line,
                    ));
                }
            }
        }

        Ok(())
    }

    /// Creates an alloca in the current function's entry block.
    ///
    /// A temporary builder positioned at the top of the entry block keeps
    /// all allocas together regardless of where the declaration appears.
    fn entry_block_alloca(
        &self,
        basic_ty: BasicTypeEnum<'ctx>,
        name: &str,
        line: usize,
    ) -> Result<PointerValue<'ctx>, CodegenError> {
        let current = self
            .current_fn
            .as_ref()
            .ok_or_else(|| CodegenError::new("Variable declaration outside of a function", line))?;
        let entry = current.value.get_first_basic_block().ok_or_else(|| {
            CodegenError::new(
                format!("Function '{}' has no entry block", current.name),
                line,
            )
        })?;

        let entry_builder = self.context.create_builder();
        match entry.get_first_instruction() {
            Some(first) => entry_builder.position_before(&first),
            None => entry_builder.position_at_end(entry),
        }

        entry_builder
            .build_alloca(basic_ty, name)
            .map_err(|e| CodegenError::builder("alloca", e, line))
    }
}
