//! Rendering port: the drawing capabilities a chart needs from a backend.

use super::element::Axis;
use super::shape::{BoundPoint, Marker, Shape};
use super::style::ShapeStyle;
use super::table::TableRow;

/// Space reserved around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 50.0,
            left: 30.0,
        }
    }
}

/// Outer dimensions of the drawing surface and its margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// A drawing backend.
///
/// Coordinates passed after [`RenderPort::begin`] are relative to the plot
/// area, i.e. already offset by the frame margins.
pub trait RenderPort {
    /// Heading shown above the chart.
    fn heading(&mut self, text: &str);

    /// Opens the drawing surface.
    fn begin(&mut self, frame: &Frame);

    /// Draws one shape.
    fn shape(&mut self, shape: &Shape, style: &ShapeStyle);

    /// Draws one marker per bound datum.
    fn markers(&mut self, marker: Marker, points: &[BoundPoint], style: &ShapeStyle) {
        for point in points {
            self.shape(&marker.at(point.x, point.y), style);
        }
    }

    fn axis(&mut self, axis: &Axis);

    /// Key/value table shown below the chart.
    fn table(&mut self, rows: &[TableRow]);
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
