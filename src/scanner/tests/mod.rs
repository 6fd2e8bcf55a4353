//! Unit tests for the scanner module.

use super::*;
use crate::token::{Token, TokenKind};

/// Helper to scan input, panicking if any scan error was recorded.
pub(super) fn scan_ok(input: &str) -> Vec<Token> {
    let (tokens, errors) = Scanner::new(input).scan();
    assert!(
        errors.is_empty(),
        "Scanning {input:?} recorded errors: {errors:?}"
    );
    tokens
}

/// Helper to scan input and return only the token kinds.
pub(super) fn scan_kinds(input: &str) -> Vec<TokenKind> {
    scan_ok(input).into_iter().map(|t| t.kind).collect()
}

/// Helper to scan input and return the recorded errors.
pub(super) fn scan_errors(input: &str) -> Vec<ScanError> {
    Scanner::new(input).scan().1
}

mod numbers;
