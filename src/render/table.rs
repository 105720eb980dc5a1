//! Two-column key/value summary table.

use std::fmt::Write;

use serde::Serialize;

use super::format::{format_value, html_escape};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub value: f64,
}

impl TableRow {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Fence and quartile rows shown under the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryTable {
    pub rows: Vec<TableRow>,
}

impl SummaryTable {
    #[must_use]
    pub fn from_rows(rows: &[TableRow]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut output = String::from("<table class=\"summary-table\">\n");
        for row in &self.rows {
            let _ = writeln!(
                output,
                r#"    <tr><td>{}:</td><td class="number">{}</td></tr>"#,
                html_escape(&row.label),
                format_value(row.value)
            );
        }
        output.push_str("</table>");
        output
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
