//! CLI module for flatco
//!
//! This module provides the command-line interface of the expander.
//!
//! ## Usage
//!
//! - `flatco <INPUT>` - Expand to stdout
//! - `flatco <INPUT> -o <FILE>` - Expand to a file
//! - `flatco --check <INPUT>` - Parse and validate only
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use flatco_core::lang::conventions;

use crate::backend::ExpandConfig;
use crate::version::FLATCO_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inline BL_func pseudo-functions into plain C/C++
#[derive(Parser, Debug)]
#[command(name = "flatco")]
#[command(version = FLATCO_VERSION)]
#[command(about = "Inline BL_func pseudo-functions into plain C/C++", long_about = None)]
pub struct Cli {
    /// Source file to expand
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Parse and validate only, write nothing
    #[arg(long, conflicts_with = "output")]
    pub check: bool,

    /// Do not emit #line markers
    #[arg(long = "no-line-markers")]
    pub no_line_markers: bool,

    /// Basename of the dialect header whose #include is commented out
    #[arg(long, value_name = "NAME", default_value = conventions::HEADER_BASENAME)]
    pub header: String,
}

impl Cli {
    /// Expansion options selected on the command line.
    pub fn expand_config(&self) -> ExpandConfig {
        ExpandConfig::new()
            .with_file_name(self.input.to_string_lossy())
            .with_header_name(self.header.as_str())
            .with_line_markers(!self.no_line_markers)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.check {
        return commands::check_file(&cli.input);
    }
    let config = cli.expand_config();
    commands::expand_file(&cli.input, cli.output.as_deref(), &config)
}

// ============================================================================
// Tests
// ============================================================================
