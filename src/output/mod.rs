//! Writers for rendered charts and analysis summaries.

mod document;
mod summary;

pub use document::{DocumentOptions, inject_into, standalone_document};
pub use summary::{
    SummaryFormatter, SummaryJsonFormatter, SummaryMarkdownFormatter, SummaryTextFormatter,
};

/// Format of the `summary` command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Format of the `render` command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    /// HTML page, or a fragment injected into an existing page.
    #[default]
    Html,
    /// Bare `<svg>` document.
    Svg,
}

impl std::str::FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("Unknown chart format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
