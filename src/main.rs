//! The Lox interpreter CLI.
//!
//! This binary provides the `tokenize`, `parse`, and `evaluate` commands
//! and delegates stage orchestration and output to the driver module.

use clap::{Parser, Subcommand};

mod driver;

/// Command-line interface for the Lox interpreter.
#[derive(Parser)]
#[command(name = "lox")]
#[command(about = "A tree-walking interpreter for the Lox language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Scan a Lox source file and print its token stream.
    Tokenize {
        /// The source file to scan (e.g., `expr.lox`).
        file: String,
    },
    /// Parse a Lox source file and print its expression tree.
    Parse {
        /// The source file to parse.
        file: String,
    },
    /// Evaluate the expression in a Lox source file and print its value.
    Evaluate {
        /// The source file to evaluate.
        file: String,
    },
}

/// Entry point for the Lox interpreter.
fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Tokenize { file } => driver::tokenize(&read_source(&file)),
        Commands::Parse { file } => driver::parse(&read_source(&file)),
        Commands::Evaluate { file } => driver::evaluate(&read_source(&file)),
    };

    std::process::exit(exit_code);
}

/// Reads the source file, exiting with code 1 when it cannot be read.
fn read_source(file: &str) -> String {
    match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read file '{file}': {error}");
            std::process::exit(1);
        }
    }
}
