//! Cursor position management for the scanner.
//!
//! This module provides methods for inspecting and advancing the scanner's
//! position within the source text.

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the next unconsumed character without consuming it.
    ///
    /// Returns `None` at the end of input.
    pub(super) fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the character after the next one, without consuming either.
    pub(super) fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes and returns the next character.
    ///
    /// Advances the byte position by the character's UTF-8 width and
    /// increments the line counter when the character is a newline.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the next character iff it equals `expected`.
    ///
    /// Returns `true` when a character was consumed.
    pub(super) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }
}
