//! Chart rendering.
//!
//! [`BoxChart`] plans the drawing and talks to any [`RenderPort`];
//! [`SvgPort`] is the backend that produces SVG markup and an HTML fragment.

mod builder;
mod chart;
mod curve;
mod element;
pub mod format;
mod port;
mod scale;
mod shape;
mod style;
mod svg;
mod table;

pub use builder::SvgBuilder;
pub use chart::{
    BoxChart, ChartLayout, ChartOptions, ChartStyle, DEFAULT_BOX_HEIGHT, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
pub use curve::{basis_path, linear_path};
pub use element::{Axis, AxisOrientation, CircleElement, PathElement, SvgElement};
pub use port::{Frame, Margin, RenderPort};
pub use scale::LinearScale;
pub use shape::{BoundPoint, Marker, Shape};
pub use style::{ChartColor, ShapeStyle, TextAnchor};
pub use svg::{RenderedChart, SvgPort};
pub use table::{SummaryTable, TableRow};
