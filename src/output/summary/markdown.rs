use std::fmt::Write;

use crate::error::Result;
use crate::render::format::format_value;
use crate::stats::Analysis;

use super::SummaryFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryMarkdownFormatter {
    show_histogram: bool,
}

impl SummaryMarkdownFormatter {
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

impl SummaryFormatter for SummaryMarkdownFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let summary = &analysis.summary;
        let stats = &summary.stats;
        let mut output = String::new();

        writeln!(output, "## Box Summary\n").ok();
        writeln!(output, "| Statistic | Value |").ok();
        writeln!(output, "|-----------|------:|").ok();
        for (label, value) in stats.table_rows() {
            writeln!(output, "| {label} | {} |", format_value(value)).ok();
        }
        writeln!(output, "| IQR | {} |", format_value(stats.iqr)).ok();
        writeln!(output).ok();

        writeln!(
            output,
            "**Values:** {} | **Outliers:** {} | **Plotted:** {}{}\n",
            summary.count,
            summary.outlier_count(),
            summary.plotted.len(),
            if summary.constrained {
                " (constrained)"
            } else {
                ""
            }
        )
        .ok();

        if self.show_histogram && !analysis.histogram.is_empty() {
            writeln!(output, "### Histogram\n").ok();
            writeln!(output, "| Lower | Upper | Count |").ok();
            writeln!(output, "|------:|------:|------:|").ok();
            for bin in &analysis.histogram.bins {
                writeln!(
                    output,
                    "| {} | {} | {} |",
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
