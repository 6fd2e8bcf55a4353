//! Unit tests for the parser.
//!
//! Tests are organized by concern:
//! - [`expr`]: precedence, associativity, literals, grouping
//! - [`errors`]: error recording and absent-subtree recovery

use super::*;
use crate::ast::Expr;
use crate::scanner::Scanner;


/// Helper to scan and parse input, returning the root and errors.
pub(super) fn parse_source(input: &str) -> (Option<Expr>, Vec<ParseError>) {
    let (tokens, scan_errors) = Scanner::new(input).scan();
    assert!(
        scan_errors.is_empty(),
        "Scanner failed on parser test input {input:?}: {scan_errors:?}"
    );
    Parser::new(tokens).parse()
}

/// Helper to parse input that must succeed, returning the root.
pub(super) fn parse_ok(input: &str) -> Expr {
    let (expr, errors) = parse_source(input);
    assert!(
        errors.is_empty(),
        "Parsing {input:?} recorded errors: {errors:?}"
    );
    expr.unwrap_or_else(|| panic!("Parsing {input:?} produced no expression"))
}

/// Helper to parse input and return the recorded errors.
pub(super) fn parse_errors(input: &str) -> Vec<ParseError> {
    parse_source(input).1
}

/// Helper returning the parenthesized prefix form of a parsed input.
pub(super) fn printed(input: &str) -> String {
    parse_ok(input).to_string()
}
