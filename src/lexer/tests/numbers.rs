//! Tests for number literal scanning.

use super::*;

#[test]
fn test_integer_literal_simple() {
    let tokens = tokenize("123");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Int(123)));
}

#[test]
fn test_integer_literal_zero() {
    let tokens = tokenize("0");
    assert_eq!(tokens[0].literal, Some(Literal::Int(0)));
}

#[test]
fn test_integer_literal_i32_max() {
    let tokens = tokenize("2147483647");
    assert_eq!(tokens[0].literal, Some(Literal::Int(i32::MAX)));
}

#[test]
fn test_integer_literal_overflow() {
    let err = tokenize_error("2147483648");
    assert!(err.message.contains("does not fit in 32 bits"));
}

#[test]
fn test_float_literal() {
    let tokens = tokenize("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Float(3.14)));
    assert_eq!(tokens[0].lexeme, "3.14");
}

#[test]
fn test_float_requires_fraction_digit() {
    // `1.` is an integer followed by a dot, not a float.
    let kinds = tokenize_kinds("1.");
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn test_no_leading_dot_float() {
    // `.5` is a dot followed by an integer.
    let kinds = tokenize_kinds(".5");
    assert_eq!(kinds, vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_minus_is_not_part_of_number() {
    // Signs are unary operators, not part of the literal.
    let tokens = tokenize("-42");
    assert_eq!(tokens[0].kind, TokenKind::Minus);
    assert_eq!(tokens[1].literal, Some(Literal::Int(42)));
}
