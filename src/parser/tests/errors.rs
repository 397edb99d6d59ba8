//! Parser error tests.

use super::*;

#[test]
fn test_error_display_format() {
    let err = parse_error("fn main(): void { let x: i32 = ; }");
    let display = err.to_string();
    assert!(display.starts_with("Parser error at line 1: "), "{}", display);
}

#[test]
fn test_missing_semicolon() {
    let err = parse_error("fn main(): void { let x: i32 = 5 }");
    assert!(err.message.contains("Expected ';'"), "{}", err.message);
}

#[test]
fn test_unknown_type() {
    let err = parse_error("fn main(): void { let x: i33 = 5; }");
    assert_eq!(err.message, "Unknown type: 'i33'");
}

#[test]
fn test_missing_return_type() {
    let err = parse_error("fn main() { }");
    assert!(err.message.contains("Expected ':'"), "{}", err.message);
}

#[test]
fn test_missing_closing_brace() {
    let err = parse_error("fn main(): void { return;");
    assert!(err.message.contains("Expected '}'"), "{}", err.message);
}

#[test]
fn test_missing_expression() {
    let err = parse_error("fn main(): void { return +; }");
    assert!(
        err.message.contains("Expected expression"),
        "{}",
        err.message
    );
}

#[test]
fn test_error_line_number() {
    let err = parse_error("fn main(): void {\n    let x: i32 = ;\n}");
    assert_eq!(err.line, 2);
}

#[test]
fn test_param_missing_type() {
    let err = parse_error("fn f(a): void { }");
    assert!(err.message.contains("Expected ':'"), "{}", err.message);
}

#[test]
fn test_compound_assignment_is_rejected() {
    // `+=` lexes but is not part of the statement grammar.
    let err = parse_error("fn main(): void { x += 1; }");
    assert!(err.message.contains("Expected ';'"), "{}", err.message);
}

#[test]
fn test_stray_token_at_top_level() {
    let err = parse_error("}");
    assert!(
        err.message.contains("Expected expression"),
        "{}",
        err.message
    );
}
