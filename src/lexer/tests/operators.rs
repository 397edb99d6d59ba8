//! Tests for one- and two-character operators.

use super::*;

#[test]
fn test_single_char_operators() {
    let kinds = tokenize_kinds("! = + - * / % < >");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators() {
    let kinds = tokenize_kinds("!= == += -= *= /= %= <= >=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::PlusEqual,
            TokenKind::MinusEqual,
            TokenKind::StarEqual,
            TokenKind::SlashEqual,
            TokenKind::PercentEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_equal_equal_then_equal() {
    // Maximal munch: `===` is `==` followed by `=`.
    let kinds = tokenize_kinds("===");
    assert_eq!(
        kinds,
        vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]
    );
}

#[test]
fn test_comparison_in_expression() {
    let kinds = tokenize_kinds("a<=b");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::LessEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operator_lexemes() {
    let tokens = tokenize("+= <=");
    assert_eq!(tokens[0].lexeme, "+=");
    assert_eq!(tokens[1].lexeme, "<=");
}
