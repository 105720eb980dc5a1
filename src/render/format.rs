//! Text helpers shared by the SVG and HTML writers.

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Display form of a statistic: floating-point noise beyond ten decimals is dropped.
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e9 {
        return format!("{value}");
    }
    let rounded = (value * 1e10).round() / 1e10;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Compact coordinate for SVG attributes, two decimals at most.
#[must_use]
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
