//! The Lox expression interpreter library.
//!
//! This library provides the core pipeline stages of the interpreter:
//! lexical scanning, parsing, and evaluation.
//!
//! # Modules
//!
//! - [`token`] - Token types and literal payloads
//! - [`scanner`] - Lexical analysis (source text to tokens)
//! - [`ast`] - Expression tree definitions and the parenthesized printer
//! - [`parser`] - Recursive descent expression parser
//! - [`interpreter`] - Post-order evaluator and runtime values
//!
//! # Example
//!
//! ```
//! use lox::interpreter::{Interpreter, Value};
//! use lox::parser::Parser;
//! use lox::scanner::Scanner;
//!
//! let (tokens, scan_errors) = Scanner::new("1 + 2 * 3").scan();
//! assert!(scan_errors.is_empty());
//!
//! let (expr, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! let value = Interpreter::new().evaluate(&expr.unwrap()).unwrap();
//! assert_eq!(value, Value::Number(7.0));
//! ```

pub mod ast;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod token;
