//! Post-order evaluator for Lox expressions.
//!
//! This module provides the [`Interpreter`] struct which reduces an
//! expression tree to a single runtime [`Value`] or a [`RuntimeError`].
//!
//! # Overview
//!
//! Evaluation is post-order: operands are fully evaluated (left before
//! right) before an operator's type checks run. The operators are:
//!
//! - `-`, `/`, `*`, `>`, `>=`, `<`, `<=` - both operands must be numbers
//! - `+` - numeric addition or string concatenation; mixed operands are
//!   a runtime error
//! - `==`, `!=` - structural equality over values; never an error
//! - unary `-` - operand must be a number; unary `!` - logical NOT of
//!   the operand's truthiness
//!
//! A runtime error carries the offending operator's line and unwinds to
//! the caller via `?`; there is no recovery within an evaluation.
//!
//! # Examples
//!
//! ```
//! use lox::interpreter::{Interpreter, Value};
//! use lox::parser::Parser;
//! use lox::scanner::Scanner;
//!
//! let (tokens, _) = Scanner::new("\"hello\" + \"world\"").scan();
//! let (expr, _) = Parser::new(tokens).parse();
//!
//! let value = Interpreter::new().evaluate(&expr.unwrap()).unwrap();
//! assert_eq!(value, Value::Str("helloworld".to_string()));
//! ```
//!
//! # Module Structure
//!
//! - [`value`] - Runtime values, truthiness, and display
//! - [`error`] - Runtime error types
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The tree shape consumed here

mod error;
mod value;

#[cfg(test)]
mod tests;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use value::Value;

use crate::ast::Expr;
use crate::token::{Token, TokenKind};

/// A tree-walking evaluator for Lox expressions.
///
/// The interpreter holds no state at this scope; the host call stack is
/// the evaluation stack, so expression depth bounds recursion depth.
pub struct Interpreter;

impl Interpreter {
    /// Creates a new `Interpreter`.
    pub fn new() -> Self {
        Interpreter
    }

    /// Evaluates an expression to a runtime value.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] when an operator is applied to operands
    /// of the wrong type. The error carries the operator's source line.
    pub fn evaluate(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(value) => Ok(Value::from(value)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { operator, right } => self.eval_unary(operator, right),
            Expr::Binary {
                left,
                operator,
                right,
            } => self.eval_binary(left, operator, right),
        }
    }

    fn eval_unary(&self, operator: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let value = self.evaluate(right)?;

        match operator.kind {
            TokenKind::Minus => {
                let n = number_operand(operator, &value)?;
                Ok(Value::Number(-n))
            }
            TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
            _ => unreachable!("parser only builds unary nodes for ! and -"),
        }
    }

    fn eval_binary(
        &self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let lhs = self.evaluate(left)?;
        let rhs = self.evaluate(right)?;

        match operator.kind {
            TokenKind::Minus => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Number(a - b))
            }
            TokenKind::Slash => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Number(a / b))
            }
            TokenKind::Star => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Number(a * b))
            }
            TokenKind::Plus => match (lhs, rhs) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(a + &b)),
                _ => Err(RuntimeError::operands_must_be_numbers_or_strings(operator)),
            },
            TokenKind::Greater => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Bool(a > b))
            }
            TokenKind::GreaterEqual => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Bool(a >= b))
            }
            TokenKind::Less => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Bool(a < b))
            }
            TokenKind::LessEqual => {
                let (a, b) = number_operands(operator, &lhs, &rhs)?;
                Ok(Value::Bool(a <= b))
            }
            TokenKind::EqualEqual => Ok(Value::Bool(lhs == rhs)),
            TokenKind::BangEqual => Ok(Value::Bool(lhs != rhs)),
            _ => unreachable!("parser only builds binary nodes for grammar operators"),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

/// Requires `value` to be a number, reporting the mismatch at `operator`.
fn number_operand(operator: &Token, value: &Value) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::operand_must_be_number(operator)),
    }
}

/// Requires both operands to be numbers, reporting the mismatch at `operator`.
fn number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::operands_must_be_numbers(operator)),
    }
}
