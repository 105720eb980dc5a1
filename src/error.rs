use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxChartError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render target not found: no element with id '{node_id}'")]
    RenderTargetNotFound { node_id: String },

    #[error("Invalid number '{token}' on line {line}")]
    ParseNumber { line: usize, token: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl BoxChartError {
    /// Short variant name, used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "InvalidInput",
            Self::RenderTargetNotFound { .. } => "RenderTargetNotFound",
            Self::ParseNumber { .. } => "ParseNumber",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether the error comes from configuration rather than the dataset or render target.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TomlParse(_))
    }
}

pub type Result<T> = std::result::Result<T, BoxChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
