//! Standalone HTML page and injection into an existing document.

use regex::Regex;

use crate::error::{BoxChartError, Result};
use crate::render::format::html_escape;

/// Page-level settings for a standalone HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub page_title: String,
    /// `id` of the container the chart is placed in.
    pub node_id: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            page_title: "Box Chart".to_string(),
            node_id: "box-chart".to_string(),
        }
    }
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

const HTML_STYLE: &str = r"    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1400px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1rem; overflow-x: auto; }
        .summary-table { border-collapse: collapse; background: var(--color-card); border: 1px solid var(--color-border); }
        .summary-table td { padding: 0.5rem 1rem; font-size: 0.875rem; border-bottom: 1px solid var(--color-border); }
        .summary-table td.number { text-align: right; font-variant-numeric: tabular-nums; }
        .summary-table tr:last-child td { border-bottom: none; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .chart-container, .summary-table { border: 1px solid #333; }
        }
    </style>
</head>
";

/// Wraps a chart fragment in a complete HTML page.
#[must_use]
pub fn standalone_document(fragment: &str, options: &DocumentOptions) -> String {
    let title = html_escape(&options.page_title);
    let node_id = html_escape(&options.node_id);
    format!(
        "{HTML_HEAD}    <title>{title}</title>\n{HTML_STYLE}<body>\n    <div class=\"container\">\n        <h1>{title}</h1>\n        <div id=\"{node_id}\">\n{fragment}        </div>\n        <div class=\"footer\">\n            Generated by <strong>boxchart</strong>\n        </div>\n    </div>\n</body>\n</html>\n"
    )
}

/// One attribute: a name with an optional quoted or bare value.
const ATTRIBUTE: &str = r#"[^\s"'<>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?"#;

/// Inserts `fragment` right after the opening tag of the element whose `id` is `node_id`.
///
/// Tags are matched attribute by attribute, so `id=` text inside another
/// attribute's value does not count, and tags inside `<!-- -->` comments are
/// skipped. Raw text elements such as `<script>` are not parsed.
///
/// # Errors
/// Returns `RenderTargetNotFound` if no element carries that id.
pub fn inject_into(html: &str, node_id: &str, fragment: &str) -> Result<String> {
    let not_found = || BoxChartError::RenderTargetNotFound {
        node_id: node_id.to_string(),
    };
    if node_id.is_empty() {
        return Err(not_found());
    }

    let pattern = format!(
        r#"<[A-Za-z][^\s/>]*(?:\s+{ATTRIBUTE})*?\s+id\s*=\s*(?:"{id}"|'{id}')(?:\s+{ATTRIBUTE})*\s*/?>"#,
        id = regex::escape(node_id)
    );
    let opening_tag = Regex::new(&pattern).map_err(|_| not_found())?;
    let comments = comment_spans(html);
    let found = opening_tag
        .find_iter(html)
        .find(|tag| !comments.iter().any(|span| span.contains(&tag.start())))
        .ok_or_else(not_found)?;

    tracing::debug!(node_id, offset = found.end(), "injecting chart into target element");

    let mut output = String::with_capacity(html.len() + fragment.len() + 1);
    output.push_str(&html[..found.end()]);
    output.push('\n');
    output.push_str(fragment);
    output.push_str(&html[found.end()..]);
    Ok(output)
}

/// Byte ranges of `<!-- ... -->` comments; an unterminated comment runs to the end.
fn comment_spans(html: &str) -> Vec<std::ops::Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(offset) = html[cursor..].find("<!--") {
        let start = cursor + offset;
        let end = html[start + 4..]
            .find("-->")
            .map_or(html.len(), |close| start + 4 + close + 3);
        spans.push(start..end);
        cursor = end;
    }
    spans
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
