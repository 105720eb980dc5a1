//! Configuration semantic validation.
//!
//! Checks values after parsing: supported version, usable dimensions,
//! well-formed colors and a usable render target id.

use crate::config::{CONFIG_VERSION, Config};
use crate::render::ChartColor;
use crate::{BoxChartError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `Config` if the version is unsupported, the node id is unusable,
/// a color is malformed, or the chart dimensions do not fit.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_node_id(&config.chart.node_id)?;
    validate_colors(config)?;
    config.chart_options().validate()
}

/// Validate config version.
///
/// # Errors
/// Returns `Config` if the version is set to anything but the supported one.
pub fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(BoxChartError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// An element id must be non-empty and free of whitespace.
///
/// # Errors
/// Returns `Config` describing why the id is unusable.
pub fn validate_node_id(node_id: &str) -> Result<()> {
    if node_id.is_empty() {
        return Err(BoxChartError::Config(
            "chart.node_id must not be empty".to_string(),
        ));
    }
    if node_id.chars().any(char::is_whitespace) {
        return Err(BoxChartError::Config(format!(
            "chart.node_id must not contain whitespace, got '{node_id}'"
        )));
    }
    Ok(())
}

fn validate_colors(config: &Config) -> Result<()> {
    for (key, color) in config.style.colors() {
        if !ChartColor::is_valid_hex(color) {
            return Err(BoxChartError::Config(format!(
                "style.{key} must be a #rgb or #rrggbb color, got '{color}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
