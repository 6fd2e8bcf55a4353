//! Runtime error types.

use std::fmt;

use crate::token::Token;

/// The class of a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Unary `-` applied to a non-number.
    OperandMustBeNumber,
    /// An arithmetic or comparison operator applied to non-numbers.
    OperandsMustBeNumbers,
    /// `+` applied to operands that are not two numbers or two strings.
    OperandsMustBeNumbersOrStrings,
}

/// An error raised during evaluation.
///
/// Runtime errors are fatal to the evaluation in progress: they unwind to
/// the top of the evaluator, which abandons the expression without
/// producing a value. The line is taken from the offending operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    message: String,
    line: usize,
}

impl RuntimeError {
    /// Creates an error for unary `-` applied to a non-number.
    pub fn operand_must_be_number(operator: &Token) -> Self {
        RuntimeError {
            kind: RuntimeErrorKind::OperandMustBeNumber,
            message: "Operand must be a number.".to_string(),
            line: operator.line,
        }
    }

    /// Creates an error for a numeric operator applied to non-numbers.
    pub fn operands_must_be_numbers(operator: &Token) -> Self {
        RuntimeError {
            kind: RuntimeErrorKind::OperandsMustBeNumbers,
            message: "Operands must be numbers.".to_string(),
            line: operator.line,
        }
    }

    /// Creates an error for `+` applied to mixed operand types.
    pub fn operands_must_be_numbers_or_strings(operator: &Token) -> Self {
        RuntimeError {
            kind: RuntimeErrorKind::OperandsMustBeNumbersOrStrings,
            message: "Operands must be two numbers or two strings.".to_string(),
            line: operator.line,
        }
    }

    /// Returns the class of this error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }

    /// Returns the 1-indexed line of the offending operator.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the human-readable message without the line suffix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RuntimeError {
    /// Renders the error-stream wire format: `<message>` then `[line N]`
    /// on the following line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}
