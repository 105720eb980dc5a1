use serde::Serialize;

use crate::error::Result;
use crate::stats::{Analysis, HistogramBin};

use super::SummaryFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryJsonFormatter {
    include_values: bool,
}

impl SummaryJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_values: false,
        }
    }

    /// Also emit the filtered and plotted value lists.
    #[must_use]
    pub const fn with_values(mut self, include: bool) -> Self {
        self.include_values = include;
        self
    }
}

#[derive(Serialize)]
struct JsonSummaryOutput<'a> {
    count: usize,
    min: f64,
    max: f64,
    q1: f64,
    median: f64,
    q3: f64,
    iqr: f64,
    lower_fence: f64,
    upper_fence: f64,
    lower_fence_clamped: bool,
    outliers: usize,
    constrained: bool,
    plotted_count: usize,
    table: Vec<JsonTableRow>,
    histogram: &'a [HistogramBin],
    #[serde(skip_serializing_if = "Option::is_none")]
    filtered: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plotted: Option<&'a [f64]>,
}

#[derive(Serialize)]
struct JsonTableRow {
    label: &'static str,
    value: f64,
}

impl SummaryFormatter for SummaryJsonFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let summary = &analysis.summary;
        let stats = &summary.stats;
        let output = JsonSummaryOutput {
            count: summary.count,
            min: summary.min,
            max: summary.max,
            q1: stats.q1,
            median: stats.q2,
            q3: stats.q3,
            iqr: stats.iqr,
            lower_fence: stats.lower_fence,
            upper_fence: stats.upper_fence,
            lower_fence_clamped: stats.lower_fence_clamped,
            outliers: summary.outlier_count(),
            constrained: summary.constrained,
            plotted_count: summary.plotted.len(),
            table: stats
                .table_rows()
                .into_iter()
                .map(|(label, value)| JsonTableRow { label, value })
                .collect(),
            histogram: &analysis.histogram.bins,
            filtered: self.include_values.then_some(summary.filtered.as_slice()),
            plotted: self.include_values.then_some(summary.plotted.as_slice()),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
