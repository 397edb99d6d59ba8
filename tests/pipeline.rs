//! Integration tests for the Slug compiler pipeline.
//!
//! These tests drive the full lex → parse → lower → verify pipeline and
//! inspect the produced LLVM IR, plus object file output.

use slug::codegen::Codegen;
use slug::lexer::Lexer;
use slug::parser::Parser;

use inkwell::context::Context;
use tempfile::tempdir;

/// Runs the pipeline up to IR verification and returns the IR text.
fn compile_to_ir(source: &str) -> Result<String, String> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().map_err(|e| e.to_string())?;

    let mut parser = Parser::new(tokens);
    let program = parser.parse().map_err(|e| e.to_string())?;

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "pipeline_test");
    codegen.compile(&program).map_err(|e| e.to_string())?;

    Ok(codegen.ir_string())
}

#[test]
fn test_minimal_program() {
    let ir = compile_to_ir("fn main(): void { return; }").unwrap();
    assert!(ir.contains("define i32 @main()"), "{}", ir);
    assert!(ir.contains("ret i32 0"), "{}", ir);
}

#[test]
fn test_function_call_program() {
    let ir = compile_to_ir(
        "fn add(a: i32, b: i32): i32 { return a + b; }\n\
         fn main(): void { let x: i32 = add(2, 3); return; }",
    )
    .unwrap();
    assert!(ir.contains("define i32 @add"), "{}", ir);
    assert!(ir.contains("add i32"), "{}", ir);
    assert!(ir.contains("alloca i32"), "{}", ir);
    assert!(ir.contains("call i32 @add(i32 2, i32 3)"), "{}", ir);
    assert!(ir.contains("ret i32 0"), "{}", ir);
}

#[test]
fn test_global_float_constant_program() {
    let ir = compile_to_ir("let pi: f64 = 3.14;\nfn main(): void { return; }").unwrap();
    assert!(ir.contains("@pi"), "{}", ir);
    assert!(ir.contains("constant double"), "{}", ir);
}

#[test]
fn test_mutable_counter_program() {
    let ir = compile_to_ir(
        "fn main(): void { let mut x: i32 = 0; x = x + 1; return; }",
    )
    .unwrap();
    assert!(ir.contains("alloca i32"), "{}", ir);
    assert!(ir.contains("add i32"), "{}", ir);
}

#[test]
fn test_mixed_type_program() {
    let ir = compile_to_ir(
        "let scale: f64 = 2.0;\n\
         fn halve(x: f64): f64 { return x / scale; }\n\
         fn main(): void { let y: f64 = halve(3.0); return; }",
    )
    .unwrap();
    assert!(ir.contains("fdiv double"), "{}", ir);
    assert!(ir.contains("call double @halve"), "{}", ir);
}

#[test]
fn test_bool_program() {
    let ir = compile_to_ir(
        "fn both(a: bool, b: bool): bool { return a == b; }\n\
         fn main(): void { let t: bool = both(true, false); return; }",
    )
    .unwrap();
    assert!(ir.contains("icmp eq i1"), "{}", ir);
}

#[test]
fn test_return_value_from_void_function_is_fatal() {
    let err = compile_to_ir("fn main(): void { return 5; }").unwrap_err();
    assert!(
        err.contains("cannot return a value from a void function."),
        "{}",
        err
    );
}

#[test]
fn test_empty_return_from_non_void_function_is_fatal() {
    let err =
        compile_to_ir("fn f(): i32 { return; }\nfn main(): void { return; }").unwrap_err();
    assert!(
        err.contains("Empty return in function with non-void return type."),
        "{}",
        err
    );
}

#[test]
fn test_object_file_output() {
    let source = "fn main(): void { return; }";
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize().expect("lex");
    let program = Parser::new(tokens).parse().expect("parse");

    let context = Context::create();
    let mut codegen = Codegen::new(&context, "object_test");
    codegen.compile(&program).expect("compile");

    let dir = tempdir().expect("temp dir");
    let object_path = dir.path().join("out.o");
    codegen.write_object_file(&object_path).expect("write");

    let metadata = std::fs::metadata(&object_path).expect("object file exists");
    assert!(metadata.len() > 0, "object file is empty");
}
