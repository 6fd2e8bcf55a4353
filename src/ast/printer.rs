//! Parenthesized prefix rendering of expression trees.
//!
//! This is the `parse` command's output format: every operator application
//! is fully parenthesized with the operator lexeme first, and groupings
//! render as `(group ...)`.

use std::fmt;

use super::{Expr, LiteralValue};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Grouping(inner) => write!(f, "(group {inner})"),
        }
    }
}

impl fmt::Display for LiteralValue {
    /// Number literals print in the same canonical text as the `tokenize`
    /// literal field, so `72` renders as `72.0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => f.write_str("nil"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Number(n) if n.fract() == 0.0 => write!(f, "{n:.1}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => f.write_str(s),
        }
    }
}
