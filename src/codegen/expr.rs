//! Expression lowering.
//!
//! This module lowers Slug expressions to SSA values. Instruction
//! selection is type-directed: floating operands select the `f`-prefixed
//! instructions and ordered float predicates, integer operands select the
//! signed integer instructions and predicates. Operand types must match
//! exactly; there is no implicit coercion.

use super::Codegen;
use super::binding::Storage;
use super::error::CodegenError;
use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::token::Literal;
use inkwell::types::BasicTypeEnum;
use inkwell::values::{
    BasicMetadataValueEnum, BasicValueEnum, FloatValue, IntValue, ValueKind,
};
use inkwell::{FloatPredicate, IntPredicate};

impl<'ctx> Codegen<'ctx> {
    /// Lowers an expression.
    ///
    /// Returns `None` for calls to void functions, which produce no SSA
    /// value; every other expression produces one.
    pub(super) fn lower_expr(
        &mut self,
        expr: &Expr,
    ) -> Result<Option<BasicValueEnum<'ctx>>, CodegenError> {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(Some(self.constant_literal(*literal))),
            ExprKind::Variable(name) => self.lower_variable(name, expr.line).map(Some),
            ExprKind::Binary { op, lhs, rhs } => {
                self.lower_binary(*op, lhs, rhs, expr.line).map(Some)
            }
            ExprKind::Unary { op, operand } => {
                self.lower_unary(*op, operand, expr.line).map(Some)
            }
            ExprKind::Call { callee, args } => self.lower_call(callee, args, expr.line),
        }
    }

    /// Lowers an expression whose value is required.
    ///
    /// # Errors
    ///
    /// Fails if the expression is a call to a void function.
    pub(super) fn lower_expr_value(
        &mut self,
        expr: &Expr,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let line = expr.line;
        self.lower_expr(expr)?.ok_or_else(|| {
            CodegenError::new("cannot use a void value in an expression", line)
        })
    }

    /// Produces a constant of the IR type matching the literal.
    pub(super) fn constant_literal(&self, literal: Literal) -> BasicValueEnum<'ctx> {
        match literal {
            // Sign-extend through i64 so negative folded constants keep
            // their bottom 32 bits intact.
            Literal::Int(value) => self
                .context
                .i32_type()
                .const_int(value as i64 as u64, true)
                .into(),
            Literal::Float(value) => self.context.f64_type().const_float(value).into(),
            Literal::Bool(value) => self
                .context
                .bool_type()
                .const_int(value as u64, false)
                .into(),
        }
    }

    /// Renders an IR type name for error messages.
    pub(super) fn type_name(ty: BasicTypeEnum<'_>) -> String {
        ty.print_to_string().to_string()
    }

    /// Lowers a variable reference.
    ///
    /// Slot-backed bindings (locals, mutable globals) load through their
    /// address; value bindings (parameters, immutable global constants)
    /// are used directly. An undefined name is a fatal error.
    fn lower_variable(
        &mut self,
        name: &str,
        line: usize,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let binding = *self
            .scopes
            .lookup(name)
            .ok_or_else(|| CodegenError::undefined_variable(name, line))?;

        match binding.storage {
            Storage::Slot(ptr) => {
                let _basic_ty = self.basic_type(binding.ty, line)?;
                self.builder
                    .build_load(ptr, name)
                    .map_err(|e| CodegenError::builder("load", e, line))
            }
            Storage::Value(value) => Ok(value),
            Storage::Function(_) => Err(CodegenError::new(
                format!("Function '{}' cannot be used as a value", name),
                line,
            )),
        }
    }

    /// Lowers a binary operation.
    ///
    /// Both operands are lowered left to right and must have the same IR
    /// type. Float operands select float instructions, integer operands
    /// select signed integer instructions.
    fn lower_binary(
        &mut self,
        op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
        line: usize,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let lhs_value = self.lower_expr_value(lhs)?;
        let rhs_value = self.lower_expr_value(rhs)?;

        if lhs_value.get_type() != rhs_value.get_type() {
            return Err(CodegenError::new(
                format!(
                    "Type mismatch in binary expression: operands are '{}' and '{}'",
                    Self::type_name(lhs_value.get_type()),
                    Self::type_name(rhs_value.get_type()),
                ),
                line,
            ));
        }

        match (lhs_value, rhs_value) {
            (BasicValueEnum::FloatValue(l), BasicValueEnum::FloatValue(r)) => {
                self.lower_float_binary(op, l, r, line)
            }
            (BasicValueEnum::IntValue(l), BasicValueEnum::IntValue(r)) => {
                self.lower_int_binary(op, l, r, line)
            }
            _ => Err(CodegenError::new(
                format!("Operator '{}' requires numeric operands", op),
                line,
            )),
        }
    }

    fn lower_int_binary(
        &mut self,
        op: BinaryOp,
        lhs: IntValue<'ctx>,
        rhs: IntValue<'ctx>,
        line: usize,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let b = &self.builder;
        let value = match op {
            BinaryOp::Add => b.build_int_add(lhs, rhs, "addtmp"),
            BinaryOp::Sub => b.build_int_sub(lhs, rhs, "subtmp"),
            BinaryOp::Mul => b.build_int_mul(lhs, rhs, "multmp"),
            BinaryOp::Div => b.build_int_signed_div(lhs, rhs, "divtmp"),
            BinaryOp::Mod => b.build_int_signed_rem(lhs, rhs, "modtmp"),
            BinaryOp::Eq => b.build_int_compare(IntPredicate::EQ, lhs, rhs, "eqtmp"),
            BinaryOp::Neq => b.build_int_compare(IntPredicate::NE, lhs, rhs, "neqtmp"),
            BinaryOp::Lt => b.build_int_compare(IntPredicate::SLT, lhs, rhs, "lttmp"),
            BinaryOp::Lte => b.build_int_compare(IntPredicate::SLE, lhs, rhs, "letmp"),
            BinaryOp::Gt => b.build_int_compare(IntPredicate::SGT, lhs, rhs, "gttmp"),
            BinaryOp::Gte => b.build_int_compare(IntPredicate::SGE, lhs, rhs, "getmp"),
        }
        .map_err(|e| CodegenError::builder("integer operation", e, line))?;

        Ok(value.into())
    }

    fn lower_float_binary(
        &mut self,
        op: BinaryOp,
        lhs: FloatValue<'ctx>,
        rhs: FloatValue<'ctx>,
        line: usize,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let b = &self.builder;
        let value: BasicValueEnum<'ctx> = match op {
            BinaryOp::Add => b
                .build_float_add(lhs, rhs, "faddtmp")
                .map_err(|e| CodegenError::builder("float operation", e, line))?
                .into(),
            BinaryOp::Sub => b
                .build_float_sub(lhs, rhs, "fsubtmp")
                .map_err(|e| CodegenError::builder("float operation", e, line))?
                .into(),
            BinaryOp::Mul => b
                .build_float_mul(lhs, rhs, "fmultmp")
                .map_err(|e| CodegenError::builder("float operation", e, line))?
                .into(),
            BinaryOp::Div => b
                .build_float_div(lhs, rhs, "fdivtmp")
                .map_err(|e| CodegenError::builder("float operation", e, line))?
                .into(),
            BinaryOp::Mod => b
                .build_float_rem(lhs, rhs, "fmodtmp")
                .map_err(|e| CodegenError::builder("float operation", e, line))?
                .into(),
            BinaryOp::Eq => b
                .build_float_compare(FloatPredicate::OEQ, lhs, rhs, "feqtmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
            BinaryOp::Neq => b
                .build_float_compare(FloatPredicate::ONE, lhs, rhs, "fneqtmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
            BinaryOp::Lt => b
                .build_float_compare(FloatPredicate::OLT, lhs, rhs, "flttmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
            BinaryOp::Lte => b
                .build_float_compare(FloatPredicate::OLE, lhs, rhs, "fletmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
            BinaryOp::Gt => b
                .build_float_compare(FloatPredicate::OGT, lhs, rhs, "fgttmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
            BinaryOp::Gte => b
                .build_float_compare(FloatPredicate::OGE, lhs, rhs, "fgetmp")
                .map_err(|e| CodegenError::builder("float comparison", e, line))?
                .into(),
        };

        Ok(value)
    }

    /// Lowers a unary operation.
    ///
    /// Negation of an integer emits `sub 0, x`; negation of a float emits
    /// `fneg`. Logical not is only defined on `i1` and emits `xor x, true`.
    /// Any other combination is a fatal type error.
    fn lower_unary(
        &mut self,
        op: UnaryOp,
        operand: &Expr,
        line: usize,
    ) -> Result<BasicValueEnum<'ctx>, CodegenError> {
        let value = self.lower_expr_value(operand)?;

        match (op, value) {
            (UnaryOp::Negate, BasicValueEnum::IntValue(v))
                if v.get_type().get_bit_width() != 1 =>
            {
                let zero = v.get_type().const_int(0, false);
                Ok(self
                    .builder
                    .build_int_sub(zero, v, "negtmp")
                    .map_err(|e| CodegenError::builder("negation", e, line))?
                    .into())
            }
            (UnaryOp::Negate, BasicValueEnum::FloatValue(v)) => Ok(self
                .builder
                .build_float_neg(v, "fnegtmp")
                .map_err(|e| CodegenError::builder("negation", e, line))?
                .into()),
            (UnaryOp::Not, BasicValueEnum::IntValue(v)) if v.get_type().get_bit_width() == 1 => {
                Ok(self
                    .builder
                    .build_not(v, "nottmp")
                    .map_err(|e| CodegenError::builder("logical not", e, line))?
                    .into())
            }
            (UnaryOp::Negate, _) => Err(CodegenError::new(
                "Operator '-' requires a numeric operand",
                line,
            )),
            (UnaryOp::Not, _) => Err(CodegenError::new(
                "Operator '!' requires a 'bool' operand",
                line,
            )),
        }
    }

    /// Lowers a function call.
    ///
    /// The callee is resolved through the scope stack; an unresolved name
    /// is the classic `Unknown function` error. Arguments are lowered left
    /// to right and must match the declared parameter types exactly. The
    /// call's SSA result is the value of the expression; calls to void
    /// functions produce `None`.
    fn lower_call(
        &mut self,
        callee: &str,
        args: &[Expr],
        line: usize,
    ) -> Result<Option<BasicValueEnum<'ctx>>, CodegenError> {
        let binding = *self
            .scopes
            .lookup(callee)
            .ok_or_else(|| CodegenError::new(format!("Unknown function '{}'", callee), line))?;

        let Storage::Function(function) = binding.storage else {
            return Err(CodegenError::new(
                format!("'{}' is not a function", callee),
                line,
            ));
        };

        let param_count = function.count_params() as usize;
        if args.len() != param_count {
            return Err(CodegenError::new(
                format!(
                    "Function '{}' expects {} argument(s), got {}",
                    callee,
                    param_count,
                    args.len()
                ),
                line,
            ));
        }

        let mut lowered: Vec<BasicMetadataValueEnum<'ctx>> = Vec::with_capacity(args.len());
        for (arg, param) in args.iter().zip(function.get_param_iter()) {
            let value = self.lower_expr_value(arg)?;
            if value.get_type() != param.get_type() {
                return Err(CodegenError::new(
                    format!(
                        "Type mismatch in call to '{}': argument is '{}' but expected '{}'",
                        callee,
                        Self::type_name(value.get_type()),
                        Self::type_name(param.get_type()),
                    ),
                    arg.line,
                ));
            }
            lowered.push(value.into());
        }

        let call = self
            .builder
            .build_call(function, &lowered, "")
            .map_err(|e| CodegenError::builder("call", e, line))?;

        match call.try_as_basic_value() {
            ValueKind::Basic(value) => Ok(Some(value)),
            ValueKind::Instruction(_) => Ok(None),
        }
    }
}
