//! Drawing primitives handed to a render port.

use super::curve::{basis_path, linear_path};

/// A single vector shape in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segments through the points (closed when the last point repeats the first).
    Polyline(Vec<(f64, f64)>),
    /// Smoothed B-spline through the control points.
    Curve(Vec<(f64, f64)>),
    Circle { cx: f64, cy: f64, r: f64 },
}

impl Shape {
    /// Two-point line segment.
    #[must_use]
    pub fn segment(from: (f64, f64), to: (f64, f64)) -> Self {
        Self::Polyline(vec![from, to])
    }

    /// Axis-aligned rectangle outline, closed back onto its first corner.
    #[must_use]
    pub fn rectangle(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::Polyline(vec![
            (left, top),
            (right, top),
            (right, bottom),
            (left, bottom),
            (left, top),
        ])
    }

    /// Path data for path-based shapes.
    #[must_use]
    pub fn path_data(&self) -> Option<String> {
        match self {
            Self::Polyline(points) => Some(linear_path(points)),
            Self::Curve(points) => Some(basis_path(points)),
            Self::Circle { .. } => None,
        }
    }
}

/// A datum bound to its plot position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundPoint {
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Marker drawn once per bound datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Circle { radius: f64 },
}

impl Marker {
    /// The shape of this marker placed at `(x, y)`.
    #[must_use]
    pub const fn at(self, x: f64, y: f64) -> Shape {
        match self {
            Self::Circle { radius } => Shape::Circle {
                cx: x,
                cy: y,
                r: radius,
            },
        }
    }
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
