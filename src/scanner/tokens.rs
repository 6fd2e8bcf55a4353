//! Token recognition for the scanner.
//!
//! This module provides the per-token dispatch and the readers for the
//! longer lexeme forms: line comments, strings, numbers, and identifiers.

use super::Scanner;
use super::error::ScanError;
use crate::token::{Literal, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Scans a single token starting at `self.start`.
    ///
    /// Reads the lead character and dispatches on it. Whitespace and
    /// comments produce no token; an unrecognized character records a
    /// [`ScanError`] and returns, leaving the scanner positioned at the
    /// next character.
    pub(super) fn scan_token(&mut self) {
        let line = self.line;
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen, line),
            ')' => self.add_token(TokenKind::RightParen, line),
            '{' => self.add_token(TokenKind::LeftBrace, line),
            '}' => self.add_token(TokenKind::RightBrace, line),
            ',' => self.add_token(TokenKind::Comma, line),
            '.' => self.add_token(TokenKind::Dot, line),
            '-' => self.add_token(TokenKind::Minus, line),
            '+' => self.add_token(TokenKind::Plus, line),
            ';' => self.add_token(TokenKind::Semicolon, line),
            '*' => self.add_token(TokenKind::Star, line),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind, line);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind, line);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind, line);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind, line);
            }
            '/' => {
                if self.match_char('/') {
                    self.line_comment();
                } else {
                    self.add_token(TokenKind::Slash, line);
                }
            }
            '"' => self.string(line),
            ' ' | '\r' | '\t' | '\n' => {}
            c if c.is_ascii_digit() => self.number(line),
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(line),
            c => self.errors.push(ScanError::unexpected_character(c, line)),
        }
    }

    /// Consumes a `//` comment up to, but not including, the next newline.
    fn line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Reads a string literal; the opening quote has been consumed.
    ///
    /// Newlines are permitted inside the literal and counted by the
    /// cursor. An unterminated string records an error at the line the
    /// scanner had reached and produces no token.
    fn string(&mut self, start_line: usize) {
        while self.peek().is_some_and(|c| c != '"') {
            self.advance();
        }

        if self.is_at_end() {
            self.errors.push(ScanError::unterminated_string(self.line));
            return;
        }

        self.advance(); // closing "

        let content = self.source[self.start + 1..self.pos - 1].to_string();
        self.add_literal_token(TokenKind::String, Literal::Str(content), start_line);
    }

    /// Reads a number literal; the lead digit has been consumed.
    ///
    /// A fractional part is consumed only when the `.` is followed by a
    /// digit, so `1.` scans as the number `1` followed by a `DOT`.
    fn number(&mut self, line: usize) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = &self.source[self.start..self.pos];
        let value: f64 = lexeme
            .parse()
            .expect("number lexeme is ASCII digits with at most one interior dot");
        self.add_literal_token(TokenKind::Number, Literal::Number(value), line);
    }

    /// Reads an identifier or keyword; the lead character has been consumed.
    fn identifier(&mut self, line: usize) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let kind = TokenKind::keyword(&self.source[self.start..self.pos])
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind, line);
    }

    fn add_token(&mut self, kind: TokenKind, line: usize) {
        let lexeme = &self.source[self.start..self.pos];
        self.tokens.push(Token::new(kind, lexeme, None, line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal, line: usize) {
        let lexeme = &self.source[self.start..self.pos];
        self.tokens.push(Token::new(kind, lexeme, Some(literal), line));
    }
}
