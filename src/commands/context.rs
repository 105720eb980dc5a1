//! Helpers shared by the subcommands: config loading, output and exit codes.

use std::fs;
use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::{BoxChartError, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, Result};

/// Loads the configuration from `config_path`, the default locations, or defaults with `--no-config`.
///
/// Failures are reported as configuration errors.
///
/// # Errors
/// Returns `Config` or `TomlParse` if the file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        tracing::debug!("configuration loading disabled");
        return Ok(LoadResult {
            config: crate::config::Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
        .map_err(into_config_error)
}

fn into_config_error(err: BoxChartError) -> BoxChartError {
    if err.is_config_error() {
        err
    } else {
        BoxChartError::Config(err.to_string())
    }
}

/// Writes `content` to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(err: &BoxChartError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}

/// Prints the error to stderr and returns its exit code.
#[must_use]
pub fn report_error(err: &BoxChartError) -> i32 {
    tracing::debug!(error_type = err.error_type(), "command failed");
    eprintln!("Error: {err}");
    exit_code_for(err)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
