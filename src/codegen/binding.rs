//! Symbol bindings tracked by the scope stack during lowering.

use inkwell::values::{BasicValueEnum, FunctionValue, PointerValue};

use crate::ast::Type;

/// Where a binding's value lives.
#[derive(Debug, Clone, Copy)]
pub(super) enum Storage<'ctx> {
    /// An addressable slot: a local alloca or the address of a mutable
    /// global. Reads load from it, assignments store through it.
    Slot(PointerValue<'ctx>),
    /// A plain SSA value used directly: a function parameter or the folded
    /// constant of an immutable global.
    Value(BasicValueEnum<'ctx>),
    /// A function handle, callable by name.
    Function(FunctionValue<'ctx>),
}

/// The association of a source name with its storage, mutability, and
/// declared type.
///
/// For function bindings `ty` is the declared return type.
#[derive(Debug, Clone, Copy)]
pub(super) struct Binding<'ctx> {
    /// Where the bound value lives.
    pub(super) storage: Storage<'ctx>,
    /// Whether the binding may be assigned to.
    pub(super) mutable: bool,
    /// The declared source-level type.
    pub(super) ty: Type,
}

impl<'ctx> Binding<'ctx> {
    /// Creates a binding backed by an addressable slot.
    pub(super) fn slot(ptr: PointerValue<'ctx>, mutable: bool, ty: Type) -> Self {
        Binding {
            storage: Storage::Slot(ptr),
            mutable,
            ty,
        }
    }

    /// Creates an immutable binding whose value is used directly.
    pub(super) fn value(value: BasicValueEnum<'ctx>, ty: Type) -> Self {
        Binding {
            storage: Storage::Value(value),
            mutable: false,
            ty,
        }
    }

    /// Creates a function binding. `return_type` is the declared source
    /// return type, which may differ from the IR signature for `main`.
    pub(super) fn function(function: FunctionValue<'ctx>, return_type: Type) -> Self {
        Binding {
            storage: Storage::Function(function),
            mutable: false,
            ty: return_type,
        }
    }
}
