//! SVG backend for the render port.

use std::fmt::Write;

use serde::Serialize;

use super::builder::SvgBuilder;
use super::element::{Axis, CircleElement, PathElement};
use super::format::{format_value, html_escape};
use super::port::{Frame, RenderPort};
use super::shape::{BoundPoint, Marker, Shape};
use super::style::ShapeStyle;
use super::table::{SummaryTable, TableRow};

/// Output of a render: the heading, the `<svg>` markup and the optional table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedChart {
    pub heading: Option<String>,
    pub svg: String,
    pub table: Option<String>,
}

impl RenderedChart {
    /// Heading, chart and table as one HTML fragment.
    #[must_use]
    pub fn to_html_fragment(&self) -> String {
        let mut output = String::new();
        if let Some(heading) = &self.heading {
            let _ = writeln!(output, "<h2>{}</h2>", html_escape(heading));
        }
        output.push_str("<div class=\"chart-container\">\n");
        output.push_str(&self.svg);
        output.push_str("\n</div>\n");
        if let Some(table) = &self.table {
            output.push_str(table);
            output.push('\n');
        }
        output
    }
}

/// Collects port calls into SVG markup.
#[derive(Debug, Default)]
pub struct SvgPort {
    heading: Option<String>,
    builder: SvgBuilder,
    table: Option<String>,
    /// Attach each marker's value as a hover tooltip.
    tooltips: bool,
}

impl SvgPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_tooltips(mut self, tooltips: bool) -> Self {
        self.tooltips = tooltips;
        self
    }

    #[must_use]
    pub fn finish(self) -> RenderedChart {
        RenderedChart {
            heading: self.heading,
            svg: self.builder.build(),
            table: self.table,
        }
    }

    fn circle(x: f64, y: f64, r: f64, style: &ShapeStyle, title: Option<String>) -> CircleElement {
        CircleElement {
            cx: x,
            cy: y,
            r,
            style: style.clone(),
            title,
        }
    }
}

impl RenderPort for SvgPort {
    fn heading(&mut self, text: &str) {
        self.heading = Some(text.to_string());
    }

    fn begin(&mut self, frame: &Frame) {
        let mut builder = SvgBuilder::new(frame.width, frame.height)
            .with_offset(frame.margin.left, frame.margin.top);
        if let Some(heading) = &self.heading {
            builder = builder.with_title(heading.clone());
        }
        self.builder = builder;
    }

    fn shape(&mut self, shape: &Shape, style: &ShapeStyle) {
        match shape {
            Shape::Circle { cx, cy, r } => {
                self.builder
                    .add_element(&Self::circle(*cx, *cy, *r, style, None));
            }
            Shape::Polyline(_) | Shape::Curve(_) => {
                if let Some(path) = PathElement::from_shape(shape, style) {
                    self.builder.add_element(&path);
                }
            }
        }
    }

    fn markers(&mut self, marker: Marker, points: &[BoundPoint], style: &ShapeStyle) {
        let Marker::Circle { radius } = marker;
        for point in points {
            let title = self.tooltips.then(|| format_value(point.value));
            self.builder
                .add_element(&Self::circle(point.x, point.y, radius, style, title));
        }
    }

    fn axis(&mut self, axis: &Axis) {
        self.builder.add_element(axis);
    }

    fn table(&mut self, rows: &[TableRow]) {
        self.table = Some(SummaryTable::from_rows(rows).to_html());
    }
}

#[cfg(test)]
#[path = "svg_tests.rs"]
mod tests;
