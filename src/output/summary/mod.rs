mod json;
mod markdown;
mod text;

pub use json::SummaryJsonFormatter;
pub use markdown::SummaryMarkdownFormatter;
pub use text::SummaryTextFormatter;

use crate::error::Result;
use crate::stats::Analysis;

pub trait SummaryFormatter {
    /// Format the analysis into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, analysis: &Analysis) -> Result<String>;
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
