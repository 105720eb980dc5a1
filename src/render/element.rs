//! Primitive SVG elements: axes, paths, and circles.

use std::fmt::Write;

use super::format::{format_coord, html_escape};
use super::shape::Shape;
use super::style::{ChartColor, ShapeStyle, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Horizontal axis with ticks and labels below the line.
    Bottom,
    /// Vertical axis with ticks and labels left of the line.
    Left,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// `position` is the fixed coordinate of the axis line (y for a bottom axis,
/// x for a left axis); `start`/`end` span the other coordinate. Tick
/// positions are pixel coordinates along that span.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub position: f64,
    pub start: f64,
    pub end: f64,
    pub ticks: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn bottom(y: f64, start: f64, end: f64) -> Self {
        Self::new(AxisOrientation::Bottom, y, start, end)
    }

    #[must_use]
    pub fn left(x: f64, start: f64, end: f64) -> Self {
        Self::new(AxisOrientation::Left, x, start, end)
    }

    fn new(orientation: AxisOrientation, position: f64, start: f64, end: f64) -> Self {
        Self {
            orientation,
            position,
            start,
            end,
            ticks: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 6.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Bottom => TickInfo {
                start_x: pos,
                start_y: self.position,
                end_x: pos,
                end_y: self.position + self.tick_length,
                label_x: pos,
                label_y: self.position + self.tick_length + self.font_size + 2.0,
                anchor: TextAnchor::Middle,
            },
            AxisOrientation::Left => TickInfo {
                start_x: self.position,
                start_y: pos,
                end_x: self.position - self.tick_length,
                end_y: pos,
                label_x: self.position - self.tick_length - 3.0,
                label_y: pos + self.font_size / 3.0,
                anchor: TextAnchor::End,
            },
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (x1, y1, x2, y2) = match self.orientation {
            AxisOrientation::Bottom => (self.start, self.position, self.end, self.position),
            AxisOrientation::Left => (self.position, self.start, self.position, self.end),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            format_coord(x1),
            format_coord(y1),
            format_coord(x2),
            format_coord(y2)
        );

        for (pos, label) in &self.ticks {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                format_coord(tick.start_x),
                format_coord(tick.start_y),
                format_coord(tick.end_x),
                format_coord(tick.end_y)
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                format_coord(tick.label_x),
                format_coord(tick.label_y),
                tick.anchor,
                self.font_size
            );
        }

        output
    }
}

/// A `<path>` drawn from a polyline or curve shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    pub data: String,
    pub style: ShapeStyle,
}

impl PathElement {
    /// Path element for a path-based shape, `None` for circles.
    #[must_use]
    pub fn from_shape(shape: &Shape, style: &ShapeStyle) -> Option<Self> {
        shape.path_data().map(|data| Self {
            data,
            style: style.clone(),
        })
    }
}

impl SvgElement for PathElement {
    fn render(&self) -> String {
        if self.data.is_empty() {
            return String::new();
        }
        format!(r#"<path d="{}" {}/>"#, self.data, self.style.attributes())
    }
}

/// A `<circle>` marker.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleElement {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: ShapeStyle,
    /// Hover tooltip, rendered as a `<title>` child.
    pub title: Option<String>,
}

impl SvgElement for CircleElement {
    fn render(&self) -> String {
        let attrs = format!(
            r#"cx="{}" cy="{}" r="{}" {}"#,
            format_coord(self.cx),
            format_coord(self.cy),
            format_coord(self.r),
            self.style.attributes()
        );
        match &self.title {
            Some(title) => format!(
                "<circle {attrs}>\n    <title>{}</title>\n</circle>",
                html_escape(title)
            ),
            None => format!("<circle {attrs}/>"),
        }
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
