//! Unit tests for the interpreter.
//!
//! Tests are organized by concern:
//! - [`arithmetic`]: numeric operators and string concatenation
//! - [`comparison`]: ordering operators
//! - [`equality`]: `==` / `!=` and the equality laws
//! - [`truthiness`]: unary operators and the truthiness table
//! - [`errors`]: runtime error kinds, messages, and lines
//! - [`display`]: value printing

use super::*;
use crate::parser::Parser;
use crate::scanner::Scanner;


/// Helper to run the full pipeline on `input` and evaluate the result.
pub(super) fn eval(input: &str) -> Result<Value, RuntimeError> {
    let (tokens, scan_errors) = Scanner::new(input).scan();
    assert!(
        scan_errors.is_empty(),
        "Scanner failed on interpreter test input {input:?}: {scan_errors:?}"
    );
    let (expr, parse_errors) = Parser::new(tokens).parse();
    assert!(
        parse_errors.is_empty(),
        "Parser failed on interpreter test input {input:?}: {parse_errors:?}"
    );
    let expr = expr.unwrap_or_else(|| panic!("No expression for input {input:?}"));
    Interpreter::new().evaluate(&expr)
}

/// Helper to evaluate input that must succeed.
pub(super) fn eval_ok(input: &str) -> Value {
    eval(input).unwrap_or_else(|e| panic!("Evaluating {input:?} failed: {e}"))
}

/// Helper to evaluate input that must raise a runtime error.
pub(super) fn eval_err(input: &str) -> RuntimeError {
    match eval(input) {
        Ok(value) => panic!("Expected evaluating {input:?} to fail, got {value}"),
        Err(e) => e,
    }
}
