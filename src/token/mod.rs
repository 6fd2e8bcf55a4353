//! Token definitions for the Lox scanner.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`TokenKind`] for token types, [`Literal`] for
//! the typed payload of literal tokens, and [`Token`] for representing
//! lexical units with their source lines.
//!
//! # Overview
//!
//! The scanner produces a vector of [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The exact `lexeme` substring that produced it
//! - An optional [`Literal`] payload (numbers and strings only)
//! - The 1-indexed source `line` it begins on
//!
//! # Module Structure
//!
//! - [`kind`] - Token type definitions ([`TokenKind`] enum)
//! - [`literal`] - Literal payloads ([`Literal`] enum)
//!
//! # See Also
//!
//! * [`crate::scanner`] - The scanner that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod literal;

pub use kind::TokenKind;
pub use literal::Literal;

use std::fmt;

/// A token with its kind, lexeme, literal payload, and source line.
///
/// Tokens are produced by the scanner and read-only afterwards. The
/// `lexeme` is always the exact source substring the scanner consumed,
/// so joining lexemes (plus the skipped whitespace and comments)
/// reconstructs the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact source text that produced this token.
    pub lexeme: String,
    /// The typed payload for `NUMBER` and `STRING` tokens; `None` otherwise.
    pub literal: Option<Literal>,
    /// The 1-indexed source line this token begins on.
    pub line: usize,
}

impl Token {
    /// Creates a new `Token`.
    ///
    /// This is a simple constructor that performs no validation. The
    /// scanner is responsible for keeping the lexeme, literal, and line
    /// consistent with the source.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Creates the terminal `EOF` marker token.
    ///
    /// The scanner never emits this token; the `tokenize` output sink
    /// constructs it to render the final `EOF  null` line.
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", None, line)
    }
}

impl fmt::Display for Token {
    /// Renders the token in the `tokenize` wire format:
    /// `<KIND> <lexeme> <literal>`, with `null` for an absent literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}
