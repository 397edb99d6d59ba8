//! LLVM code generation for the Slug programming language.
//!
//! This module provides the [`Codegen`] struct which lowers a Slug AST
//! into typed LLVM SSA IR and compiles it to native object code.
//!
//! # Overview
//!
//! The code generator uses [Inkwell](https://github.com/TheDan64/inkwell),
//! a safe Rust wrapper around the LLVM C API. Lowering couples several
//! concerns:
//!
//! - Symbol resolution through a stack of scope frames
//! - Type-directed instruction selection (integer vs. float operations)
//! - Stack slots for locals, placed in the function entry block
//! - Constant folding of module-scope `let` initializers into globals
//! - The `main` fix-up: `fn main(): void` lowers to the C entry
//!   signature `i32 main()` returning 0
//! - End-of-pass verification of the finished module
//!
//! # Two-pass lowering
//!
//! [`Codegen::compile`] walks the program twice. The first pass declares
//! every function prototype and lowers every module-scope `let` so that
//! forward and mutual references resolve; the second pass emits function
//! bodies in source order, keeping diagnostics stable.
//!
//! # Example
//!
//! ```no_run
//! use inkwell::context::Context;
//! use slug::codegen::Codegen;
//! use slug::lexer::Lexer;
//! use slug::parser::Parser;
//! use std::path::Path;
//!
//! let source = "fn main(): void { return; }";
//! let tokens = Lexer::new(source).tokenize().expect("lex error");
//! let program = Parser::new(tokens).parse().expect("parse error");
//!
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "example");
//! codegen.compile(&program).expect("codegen error");
//! codegen.write_object_file(Path::new("example.o")).expect("write error");
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `scope` - The scope stack
//! - `binding` - Symbol bindings (slots, values, function handles)
//! - `globals` - Module-scope `let` lowering and constant folding
//! - `stmt` - Statement lowering
//! - `expr` - Expression lowering
//! - `target` - Target machine and object file output
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [Inkwell documentation](https://thedan64.github.io/inkwell/)
//! * [LLVM Language Reference](https://llvm.org/docs/LangRef.html)

mod binding;
mod error;
mod expr;
mod globals;
mod scope;
mod stmt;
mod target;


pub use error::CodegenError;

use binding::Binding;
use scope::ScopeStack;

use crate::ast::{FnParam, Program, Stmt, StmtKind, Type};
use inkwell::context::Context;
use inkwell::module::Linkage;
use inkwell::types::{BasicMetadataTypeEnum, BasicType, BasicTypeEnum};
use inkwell::values::BasicValueEnum;

/// The function currently having its body emitted.
///
/// `Return` lowering needs the declared source-level return type (which
/// differs from the IR signature for `main`) and local `let` lowering
/// needs the function value to reach its entry block.
struct CurrentFn<'ctx> {
    /// The LLVM function being emitted into.
    value: inkwell::values::FunctionValue<'ctx>,
    /// The source-level function name.
    name: String,
    /// The declared source-level return type.
    return_type: Type,
}

/// LLVM code generator for Slug programs.
///
/// `Codegen` holds the LLVM context, module, and builder required for
/// generating IR, plus the scope stack used for symbol resolution. It
/// provides methods to compile a Slug [`Program`] and write the output
/// to an object file.
///
/// # Lifetime
///
/// The `'ctx` lifetime parameter ties this struct to an LLVM [`Context`].
/// The context must outlive the code generator.
///
/// # Thread Safety
///
/// LLVM contexts are not thread-safe. Each thread should have its own
/// context and code generator.
pub struct Codegen<'ctx> {
    /// Reference to the LLVM context.
    context: &'ctx Context,
    /// The LLVM module being built.
    module: inkwell::module::Module<'ctx>,
    /// The IR builder for creating instructions.
    builder: inkwell::builder::Builder<'ctx>,
    /// The scope stack. The global frame is created up front and holds
    /// function handles and global bindings.
    scopes: ScopeStack<'ctx>,
    /// The function currently being emitted, if any.
    current_fn: Option<CurrentFn<'ctx>>,
}

impl<'ctx> Codegen<'ctx> {
    /// Creates a new code generator with the given LLVM context and
    /// module name.
    pub fn new(context: &'ctx Context, module_name: &str) -> Self {
        let module = context.create_module(module_name);
        let builder = context.create_builder();

        Codegen {
            context,
            module,
            builder,
            scopes: ScopeStack::new(),
            current_fn: None,
        }
    }

    /// Compiles a Slug program to LLVM IR and verifies the result.
    ///
    /// Lowering is two-pass so that functions may reference each other
    /// regardless of declaration order:
    ///
    /// 1. **Declare**: create every function prototype and lower every
    ///    module-scope `let` into a global, binding both in the global
    ///    scope. Any other top-level statement is rejected.
    /// 2. **Emit**: generate function bodies in source order.
    ///
    /// After both passes the module is verified; a verification failure
    /// dumps the IR to stderr and fails compilation.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] for semantic errors (undefined names,
    /// type mismatches, return checks, disallowed constructs) and for
    /// internal LLVM failures.
    pub fn compile(&mut self, program: &Program) -> Result<(), CodegenError> {
        for stmt in &program.stmts {
            match &stmt.kind {
                StmtKind::Fn {
                    name,
                    params,
                    return_type,
                    ..
                } => self.declare_function(name, params, *return_type, stmt.line)?,
                StmtKind::Let {
                    name,
                    mutable,
                    ty,
                    init,
                } => self.lower_global_let(name, *mutable, *ty, init.as_ref(), stmt.line)?,
                _ => {
                    return Err(CodegenError::new(
                        "Only function and variable declarations are allowed at the top level",
                        stmt.line,
                    ));
                }
            }
        }

        self.check_main()?;

        for stmt in &program.stmts {
            if let StmtKind::Fn {
                name,
                params,
                return_type,
                body,
            } = &stmt.kind
            {
                self.emit_function_body(name, params, *return_type, body, stmt.line)?;
            }
        }

        self.verify()
    }

    /// Declares a function prototype and binds it in the global scope.
    ///
    /// Parameter and return types are mapped `void→void`, `i32→i32`,
    /// `f64→double`, `bool→i1`. The function literally named `main` is the
    /// exception: its IR return type is always `i32` regardless of the
    /// declared type. Functions get external linkage and their parameter
    /// names are copied from the AST.
    fn declare_function(
        &mut self,
        name: &str,
        params: &[FnParam],
        return_type: Type,
        line: usize,
    ) -> Result<(), CodegenError> {
        if self.module.get_function(name).is_some() {
            return Err(CodegenError::new(
                format!("Function '{}' is already defined", name),
                line,
            ));
        }

        let param_types = params
            .iter()
            .map(|param| self.basic_type(param.ty, line).map(Into::into))
            .collect::<Result<Vec<BasicMetadataTypeEnum<'ctx>>, _>>()?;

        let fn_type = if name == "main" {
            self.context.i32_type().fn_type(&param_types, false)
        } else {
            match return_type {
                Type::Void => self.context.void_type().fn_type(&param_types, false),
                other => self.basic_type(other, line)?.fn_type(&param_types, false),
            }
        };

        let function = self
            .module
            .add_function(name, fn_type, Some(Linkage::External));

        for (value, param) in function.get_param_iter().zip(params) {
            set_param_name(value, &param.name);
        }

        self.scopes
            .declare(name, Binding::function(function, return_type));

        Ok(())
    }

    /// Checks that the program declares `fn main(): void`.
    fn check_main(&self) -> Result<(), CodegenError> {
        match self.scopes.lookup("main") {
            Some(binding) => match binding.storage {
                binding::Storage::Function(_) if binding.ty == Type::Void => Ok(()),
                binding::Storage::Function(_) => Err(CodegenError::without_line(format!(
                    "'main' must be declared with return type 'void', not '{}'",
                    binding.ty
                ))),
                _ => Err(CodegenError::without_line("'main' must be a function")),
            },
            None => Err(CodegenError::without_line("No 'main' function found")),
        }
    }

    /// Emits the body of a declared function.
    ///
    /// Pushes a fresh local scope, creates the entry block, binds the
    /// parameters as immutable value bindings, and lowers the body block.
    /// If the last basic block lacks a terminator, one is synthesized:
    /// `ret i32 0` for `main`, `ret void` for void functions, and a fatal
    /// error otherwise.
    fn emit_function_body(
        &mut self,
        name: &str,
        params: &[FnParam],
        return_type: Type,
        body: &Stmt,
        line: usize,
    ) -> Result<(), CodegenError> {
        let function = self.module.get_function(name).ok_or_else(|| {
            CodegenError::new(format!("Function '{}' was never declared", name), line)
        })?;

        self.scopes.push();

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        for (value, param) in function.get_param_iter().zip(params) {
            self.scopes
                .declare(&param.name, Binding::value(value, param.ty));
        }

        self.current_fn = Some(CurrentFn {
            value: function,
            name: name.to_string(),
            return_type,
        });

        self.lower_stmt(body)?;

        if !self.current_block_terminated() {
            if name == "main" {
                let zero = self.context.i32_type().const_int(0, false);
                self.builder
                    .build_return(Some(&zero))
                    .map_err(|e| CodegenError::builder("return", e, line))?;
            } else if return_type == Type::Void {
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

        self.scopes.pop();
        self.current_fn = None;

        Ok(())
    }

    /// Returns the LLVM type corresponding to a Slug value type.
    ///
    /// `void` is only valid in return position and `string` is not
    /// lowerable at all; both are rejected here.
    fn basic_type(&self, ty: Type, line: usize) -> Result<BasicTypeEnum<'ctx>, CodegenError> {
        match ty {
            Type::I32 => Ok(self.context.i32_type().into()),
            Type::F64 => Ok(self.context.f64_type().into()),
            Type::Bool => Ok(self.context.bool_type().into()),
            Type::Void => Err(CodegenError::new(
                "'void' is only valid as a return type",
                line,
            )),
            Type::Str => Err(CodegenError::new(
                "values of type 'string' are not supported",
                line,
            )),
        }
    }

    /// Returns `true` if the block the builder is positioned in already
    /// ends with a terminator instruction.
    fn current_block_terminated(&self) -> bool {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_terminator())
            .is_some()
    }

    /// Runs LLVM module verification.
    ///
    /// On failure the IR is dumped to stderr for diagnosis and the
    /// verifier's message is returned as the error.
    fn verify(&self) -> Result<(), CodegenError> {
        if let Err(message) = self.module.verify() {
            self.module.print_to_stderr();
            return Err(CodegenError::without_line(format!(
                "IR verification failed: {}",
                message
            )));
        }
        Ok(())
    }

    /// Renders the module's IR as text. Debug aid.
    pub fn ir_string(&self) -> String {
        self.module.print_to_string().to_string()
    }
}

/// Copies a parameter name from the AST onto the LLVM parameter value.
fn set_param_name(value: BasicValueEnum<'_>, name: &str) {
    match value {
        BasicValueEnum::IntValue(v) => v.set_name(name),
        BasicValueEnum::FloatValue(v) => v.set_name(name),
        BasicValueEnum::PointerValue(v) => v.set_name(name),
        _ => {}
    }
}
