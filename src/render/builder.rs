//! SVG composition builder for chart layouts.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, html_escape};

/// Builder for an `<svg>` document whose elements live in a translated plot group.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    offset: (f64, f64),
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            offset: (0.0, 0.0),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Translate the plot group, typically by the left/top margins.
    #[must_use]
    pub const fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn add_element<E: SvgElement>(&mut self, element: &E) {
        let rendered = element.render();
        if !rendered.is_empty() {
            self.elements.push(rendered);
        }
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = format_coord(self.width),
            h = format_coord(self.height)
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        let _ = writeln!(
            output,
            r#"    <g class="box-area" transform="translate({}, {})">"#,
            format_coord(self.offset.0),
            format_coord(self.offset.1)
        );

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "        {line}");
            }
        }

        output.push_str("    </g>\n</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
