use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, FileConfigLoader, LoadResult, RealFileSystem, validate_config_semantics};
use crate::{BoxChartError, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), format, cli)
        }
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !cli.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Validates a configuration file.
///
/// Failures, including an unreadable file, are configuration errors.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or fails semantic validation.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let content = fs::read_to_string(config_path).map_err(|e| {
        BoxChartError::Config(format!(
            "Failed to read {}: {e}",
            config_path.display()
        ))
    })?;

    let config = FileConfigLoader::<RealFileSystem>::parse_config(&content)?;
    validate_config_semantics(&config)?;
    tracing::debug!(path = %config_path.display(), "configuration passed validation");
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the format is unknown, the configuration cannot be loaded,
/// or serialization fails.
pub fn run_config_show_impl(config_path: Option<&Path>, format: &str, cli: &Cli) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config)?;

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        "text" => Ok(format_config_text(&loaded)),
        other => Err(BoxChartError::Config(format!(
            "Unknown config output format: {other}. Use 'text' or 'json'."
        ))),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config: &Config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}", path.display());
        }
        None => output.push_str("# source: built-in defaults\n"),
    }
    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"");
    }

    output.push_str("\n[chart]\n");
    let chart = &config.chart;
    let _ = writeln!(output, "  width = {}", chart.width);
    let _ = writeln!(output, "  height = {}", chart.height);
    let _ = writeln!(output, "  box_height = {}", chart.box_height);
    let _ = writeln!(output, "  constrain = {}", chart.constrain);
    let _ = writeln!(output, "  table = {}", chart.table);
    let _ = writeln!(output, "  tooltips = {}", chart.tooltips);
    if let Some(title) = &chart.title {
        let _ = writeln!(output, "  title = \"{title}\"");
    }
    let _ = writeln!(output, "  node_id = \"{}\"", chart.node_id);

    output.push_str("\n[style]\n");
    for (key, color) in config.style.colors() {
        let _ = writeln!(output, "  {key} = \"{color}\"");
    }
    let _ = writeln!(output, "  point_radius = {}", config.style.point_radius);
    let _ = writeln!(output, "  point_opacity = {}", config.style.point_opacity);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
