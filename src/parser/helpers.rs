//! Parser helper methods for token navigation.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns `true` when every token has been consumed.
    pub(super) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the current token, or `None` at the end of the stream.
    pub(super) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns `true` when the current token has the given kind.
    ///
    /// Always `false` at the end of the stream.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Advances to the next token. Does nothing at the end of the stream.
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Returns the just-consumed token.
    ///
    /// Only valid after a successful [`match_kind`](Self::match_kind) or
    /// [`match_any`](Self::match_any); the productions use it to capture
    /// operator tokens for the tree.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Consumes the current token iff it has the given kind.
    pub(super) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token iff its kind is one of `kinds`.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.match_kind(kind))
    }

    /// Consumes the current token when it matches `kind`; otherwise
    /// records `error` without advancing.
    pub(super) fn consume(&mut self, kind: TokenKind, error: ParseError) {
        if !self.match_kind(kind) {
            self.errors.push(error);
        }
    }

    /// Returns the line to report an error at: the current token's line,
    /// or the last token's line at the end of the stream, or line 1 for
    /// an empty stream.
    pub(super) fn error_line(&self) -> usize {
        match self.current() {
            Some(token) => token.line,
            None => self.tokens.last().map_or(1, |t| t.line),
        }
    }
}
