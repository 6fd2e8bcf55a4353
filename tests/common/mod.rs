//! Common test utilities for Lox integration tests.
//!
//! This module provides the helpers used by the e2e test files to run
//! the compiled binary against temporary source files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::fs;
use std::process::Command;

use tempfile::tempdir;

/// Captured output of one interpreter invocation.
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl RunOutput {
    /// Returns stdout split into lines for order-sensitive assertions.
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Returns stderr split into lines for order-sensitive assertions.
    pub fn stderr_lines(&self) -> Vec<&str> {
        self.stderr.lines().collect()
    }
}

/// Returns the path to the lox binary built by cargo.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

/// Writes `source` to a temporary file and runs `lox <command> <file>`.
pub fn run_command(command: &str, source: &str) -> RunOutput {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("input.lox");
    fs::write(&path, source).expect("Failed to write source file");

    let output = Command::new(lox_binary())
        .arg(command)
        .arg(&path)
        .output()
        .expect("Failed to run the lox binary");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code().unwrap_or(-1),
    }
}
