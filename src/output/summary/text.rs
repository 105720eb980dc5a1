use std::fmt::Write;

use crate::error::Result;
use crate::render::format::format_value;
use crate::stats::Analysis;

use super::SummaryFormatter;

/// Width of the label column.
const LABEL_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTextFormatter {
    show_histogram: bool,
}

impl SummaryTextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_histogram: true,
        }
    }

    #[must_use]
    pub const fn with_histogram(mut self, show: bool) -> Self {
        self.show_histogram = show;
        self
    }
}

impl SummaryFormatter for SummaryTextFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let summary = &analysis.summary;
        let stats = &summary.stats;
        let mut output = String::new();

        writeln!(output, "Box Summary ({} values):", summary.count).ok();
        writeln!(output).ok();
        for (label, value) in stats.table_rows() {
            writeln!(
                output,
                "  {:<LABEL_WIDTH$}{}",
                format!("{label}:"),
                format_value(value)
            )
            .ok();
        }
        writeln!(output).ok();

        writeln!(output, "  {:<LABEL_WIDTH$}{}", "IQR:", format_value(stats.iqr)).ok();
        writeln!(output, "  {:<LABEL_WIDTH$}{}", "Min:", format_value(summary.min)).ok();
        writeln!(output, "  {:<LABEL_WIDTH$}{}", "Max:", format_value(summary.max)).ok();
        writeln!(output, "  {:<LABEL_WIDTH$}{}", "Outliers:", summary.outlier_count()).ok();
        let mode = if summary.constrained {
            " (constrained)"
        } else {
            ""
        };
        writeln!(
            output,
            "  {:<LABEL_WIDTH$}{}{mode}",
            "Plotted:",
            summary.plotted.len()
        )
        .ok();
        if stats.lower_fence_clamped {
            writeln!(output, "  Lower fence clamped to the minimum").ok();
        }

        if self.show_histogram && !analysis.histogram.is_empty() {
            writeln!(output).ok();
            writeln!(output, "Histogram ({} bins):", analysis.histogram.len()).ok();
            let last = analysis.histogram.len() - 1;
            for (i, bin) in analysis.histogram.bins.iter().enumerate() {
                let close = if i == last { ']' } else { ')' };
                writeln!(
                    output,
                    "  [{}, {}{close}  {}",
                    format_value(bin.lower),
                    format_value(bin.upper),
                    bin.count
                )
                .ok();
            }
        }

        Ok(output)
    }
}
