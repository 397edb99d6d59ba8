//! Type annotation parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::Type;

impl Parser {
    /// Parses a type annotation.
    ///
    /// Primitive type names are ordinary identifiers; this production
    /// gives them meaning.
    ///
    /// # Grammar
    ///
    /// ```text
    /// type → "void" | "i32" | "f64" | "bool" | "string"
    /// ```
    pub(super) fn parse_type(&mut self) -> Result<Type, ParseError> {
        let line = self.current_line();
        let name = self.expect_identifier("Expected type name")?;
        match name.as_str() {
            "void" => Ok(Type::Void),
            "i32" => Ok(Type::I32),
            "f64" => Ok(Type::F64),
            "bool" => Ok(Type::Bool),
            "string" => Ok(Type::Str),
            _ => Err(ParseError::new(format!("Unknown type: '{}'", name), line)),
        }
    }
}
