//! Lexical analysis error types.
//!
//! This module defines [`ScanError`], which represents errors recorded
//! during scanning, and [`ScanErrorKind`] for matching on the error class.

use std::fmt;

/// The class of a scan error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A character that starts no token.
    UnexpectedCharacter,
    /// A string literal still open at the end of input.
    UnterminatedString,
}

/// An error recorded during lexical analysis.
///
/// Scan errors are recoverable: the scanner records them and continues at
/// the next character, so one pass collects every lexical problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    kind: ScanErrorKind,
    message: String,
    line: usize,
}

impl ScanError {
    /// Creates an error for a character that starts no token.
    pub fn unexpected_character(c: char, line: usize) -> Self {
        ScanError {
            kind: ScanErrorKind::UnexpectedCharacter,
            message: format!("Unexpected character: {c}"),
            line,
        }
    }

    /// Creates an error for a string literal still open at end of input.
    ///
    /// `line` is the line the scanner had reached when input ran out, not
    /// the line the string began on.
    pub fn unterminated_string(line: usize) -> Self {
        ScanError {
            kind: ScanErrorKind::UnterminatedString,
            message: "Unterminated string.".to_string(),
            line,
        }
    }

    /// Returns the class of this error.
    pub fn kind(&self) -> ScanErrorKind {
        self.kind
    }

    /// Returns the 1-indexed line the error was recorded on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the human-readable message without the line prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ScanError {
    /// Renders the error-stream wire format: `[line N] Error: <message>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}
