//! Pipeline orchestration for the CLI commands.
//!
//! Each command runs the stages it needs, writes tokens, the expression
//! tree, or the value to stdout and stage errors to stderr in their wire
//! formats, and returns the process exit code.
//!
//! Exit codes follow the sysexits convention the test harness expects:
//! 65 when any scan or parse error was recorded, 70 when evaluation
//! raised a runtime error, 0 otherwise. Scan and parse errors do not
//! short-circuit the pipeline: `parse` still parses after scan errors
//! and `tokenize` still prints the partial token stream. The runtime
//! phase only runs on a clean front-end.

use lox::interpreter::Interpreter;
use lox::parser::Parser;
use lox::scanner::Scanner;
use lox::token::Token;

/// Exit code when any scan or parse error occurred.
const EXIT_STATIC_ERROR: i32 = 65;
/// Exit code when evaluation raised a runtime error.
const EXIT_RUNTIME_ERROR: i32 = 70;

/// Runs the scanner and prints the token stream.
///
/// Scan errors go to stderr in order of occurrence; the tokens that did
/// scan are still printed, followed by the terminal `EOF  null` line.
pub(crate) fn tokenize(source: &str) -> i32 {
    let (tokens, errors) = Scanner::new(source).scan();

    for error in &errors {
        eprintln!("{error}");
    }
    for token in &tokens {
        println!("{token}");
    }

    let eof_line = tokens.last().map_or(1, |t| t.line);
    println!("{}", Token::eof(eof_line));

    if errors.is_empty() { 0 } else { EXIT_STATIC_ERROR }
}

/// Runs the scanner and parser and prints the expression tree.
pub(crate) fn parse(source: &str) -> i32 {
    let (tokens, scan_errors) = Scanner::new(source).scan();
    for error in &scan_errors {
        eprintln!("{error}");
    }

    let (expr, parse_errors) = Parser::new(tokens).parse();
    for error in &parse_errors {
        eprintln!("{error}");
    }

    if let Some(expr) = &expr {
        println!("{expr}");
    }

    if scan_errors.is_empty() && parse_errors.is_empty() {
        0
    } else {
        EXIT_STATIC_ERROR
    }
}

/// Runs the full pipeline and prints the evaluated value.
///
/// The runtime phase only runs when scanning and parsing were clean;
/// front-end errors exit 65 without evaluating.
pub(crate) fn evaluate(source: &str) -> i32 {
    let (tokens, scan_errors) = Scanner::new(source).scan();
    for error in &scan_errors {
        eprintln!("{error}");
    }

    let (expr, parse_errors) = Parser::new(tokens).parse();
    for error in &parse_errors {
        eprintln!("{error}");
    }

    if !scan_errors.is_empty() || !parse_errors.is_empty() {
        return EXIT_STATIC_ERROR;
    }
    let Some(expr) = expr else {
        return EXIT_STATIC_ERROR;
    };

    match Interpreter::new().evaluate(&expr) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(error) => {
            eprintln!("{error}");
            EXIT_RUNTIME_ERROR
        }
    }
}
