//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::{NamedSource, Report};

use crate::backend::{ExpandConfig, generate};
use crate::frontend::diagnostics::DialectError;
use crate::frontend::{parser, validator};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during expansion.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error, or not valid UTF-8)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let shown = file_path.display();
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))
}

/// Render a dialect error with the offending source context.
pub fn render_error(file_path: &Path, source: &str, err: DialectError) -> String {
    let named = NamedSource::new(file_path.display().to_string(), source.to_string());
    let report = Report::new(err).with_source_code(named);
    format!("{report:?}")
}

/// Parse and validate a file without writing anything.
pub fn check_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let unit = parser::parse(&source)
        .and_then(validator::validate)
        .map_err(|e| CliError::failure(render_error(file_path, &source, e)))?;

    let calls = unit.top.calls.len() + unit.functions.iter().map(|f| f.body.calls.len()).sum::<usize>();
    tracing::info!(
        file = %file_path.display(),
        functions = unit.functions.len(),
        calls,
        "check passed"
    );
    Ok(ExitCode::SUCCESS)
}

/// Expand a file to `output`, or to stdout when no output path is given.
///
/// Nothing is written when the source has an error.
pub fn expand_file(file_path: &Path, output: Option<&Path>, config: &ExpandConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let unit = parser::parse(&source)
        .and_then(validator::validate)
        .map_err(|e| CliError::failure(render_error(file_path, &source, e)))?;
    let expanded = generate(&unit, config);

    match output {
        Some(out_path) => {
            fs::write(out_path, &expanded).map_err(|e| {
                CliError::failure(format!("Error writing output file '{}': {}", out_path.display(), e))
            })?;
            tracing::info!(
                input = %file_path.display(),
                output = %out_path.display(),
                functions = unit.functions.len(),
                "expanded"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(expanded.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
