//! Tests for number literal scanning.

use super::{scan_kinds, scan_ok};
use crate::token::{Literal, TokenKind};

#[test]
fn test_integer_literal() {
    let tokens = scan_ok("42");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "42");
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
}

#[test]
fn test_fractional_literal() {
    let tokens = scan_ok("12.34");
    assert_eq!(tokens[0].lexeme, "12.34");
    assert_eq!(tokens[0].literal, Some(Literal::Number(12.34)));
}

#[test]
fn test_leading_zero() {
    let tokens = scan_ok("0.5");
    assert_eq!(tokens[0].literal, Some(Literal::Number(0.5)));
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    assert_eq!(
        scan_kinds("1."),
        vec![TokenKind::Number, TokenKind::Dot]
    );
}

#[test]
fn test_leading_dot_is_not_part_of_number() {
    assert_eq!(
        scan_kinds(".5"),
        vec![TokenKind::Dot, TokenKind::Number]
    );
}

#[test]
fn test_two_dots_end_the_fraction() {
    // `1.2.3` scans as the number 1.2, a dot, and the number 3.
    assert_eq!(
        scan_kinds("1.2.3"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Number]
    );
}

#[test]
fn test_number_literal_display_keeps_trailing_zero() {
    let tokens = scan_ok("200.00");
    assert_eq!(tokens[0].to_string(), "NUMBER 200.00 200.0");
}

#[test]
fn test_adjacent_number_and_identifier() {
    assert_eq!(
        scan_kinds("1foo"),
        vec![TokenKind::Number, TokenKind::Identifier]
    );
}
