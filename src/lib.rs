//! The Slug programming language compiler library.
//!
//! This library provides the core components of the Slug compiler:
//! lexical analysis, parsing, AST printing, and LLVM code generation.
//!
//! # Modules
//!
//! - [`token`] - Token types and literal payloads
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Recursive descent parser with precedence climbing
//! - [`ast`] - Abstract Syntax Tree definitions and pretty-printer
//! - [`codegen`] - LLVM code generation
//!
//! # Example
//!
//! ```no_run
//! use slug::lexer::Lexer;
//! use slug::parser::Parser;
//! use slug::codegen::Codegen;
//! use inkwell::context::Context;
//! use std::path::Path;
//!
//! // Source code to compile
//! let source = "fn main(): void { return; }";
//!
//! // Lexical analysis
//! let mut lexer = Lexer::new(source);
//! let tokens = lexer.tokenize().expect("Lexer error");
//!
//! // Parsing
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse().expect("Parse error");
//!
//! // Code generation
//! let context = Context::create();
//! let mut codegen = Codegen::new(&context, "my_program");
//! codegen.compile(&program).expect("Codegen error");
//!
//! // Write object file
//! codegen.write_object_file(Path::new("output.o")).expect("Write error");
//! ```

pub mod ast;
pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod token;
