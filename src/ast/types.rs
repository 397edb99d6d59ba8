//! Primitive type annotations.

use std::fmt;

/// A primitive type in Slug source code.
///
/// `Str` is recognized by the type parser because the surface grammar
/// knows the word `string`, but no string value can be lowered to IR;
/// code generation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// The `void` type, valid only as a function return type.
    Void,
    /// 32-bit signed integer type (`i32` in Slug source code).
    I32,
    /// 64-bit IEEE-754 float type (`f64` in Slug source code).
    F64,
    /// Boolean type (`bool` in Slug source code).
    Bool,
    /// String type (`string` in Slug source code). Parsed but not lowerable.
    Str,
}

/// Displays the type as it would appear in Slug source code.
///
/// This is used for generating user-facing error messages.
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::I32 => write!(f, "i32"),
            Type::F64 => write!(f, "f64"),
            Type::Bool => write!(f, "bool"),
            Type::Str => write!(f, "string"),
        }
    }
}
