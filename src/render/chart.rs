//! Box-and-whisker chart planner.
//!
//! [`BoxChart`] turns an [`Analysis`] into a fixed sequence of port calls:
//! histogram curve, data points, box, median, whiskers, fences, axes and
//! the optional summary table.

use crate::error::{BoxChartError, Result};
use crate::stats::{Analysis, BoxStats, Histogram, Summary};

use super::element::Axis;
use super::format::format_value;
use super::port::{Frame, Margin, RenderPort};
use super::scale::LinearScale;
use super::shape::{BoundPoint, Marker, Shape};
use super::style::{ChartColor, ShapeStyle};
use super::table::TableRow;

pub const DEFAULT_WIDTH: f64 = 1300.0;
pub const DEFAULT_HEIGHT: f64 = 320.0;
pub const DEFAULT_BOX_HEIGHT: f64 = 35.0;

/// Gap between the box and the bottom of the plot area.
const BOX_OFFSET: f64 = 10.0;
/// Gap between the top of the box and the base of the histogram curve.
const CURVE_GAP: f64 = 20.0;
/// Horizontal reach of a fence bracket.
const BRACKET_WIDTH: f64 = 5.0;
/// Fence brackets are inset by this share of the box height.
const BRACKET_INSET: f64 = 0.2;
const X_TICKS: usize = 10;
const Y_TICKS: usize = 5;

/// Colors and marker settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub histogram_color: ChartColor,
    pub point_color: ChartColor,
    pub box_color: ChartColor,
    pub axis_color: ChartColor,
    pub point_radius: f64,
    pub point_opacity: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            histogram_color: ChartColor::hex("#3498db"),
            point_color: ChartColor::hex("#1abc9c"),
            box_color: ChartColor::hex("#8e44ad"),
            axis_color: ChartColor::hex("#7f8c8d"),
            point_radius: 5.0,
            point_opacity: 0.4,
        }
    }
}

/// Display options for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub width: f64,
    pub height: f64,
    pub box_height: f64,
    pub constrain: bool,
    pub table: bool,
    pub style: ChartStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            box_height: DEFAULT_BOX_HEIGHT,
            constrain: false,
            table: false,
            style: ChartStyle::default(),
        }
    }
}

impl ChartOptions {
    /// Checks that the box and the histogram fit in the plot area.
    ///
    /// # Errors
    /// Returns `Config` describing the first offending option.
    pub fn validate(&self) -> Result<()> {
        let margin = Margin::default();
        let min_width = margin.left + margin.right;
        let min_height = margin.top + margin.bottom;

        if !self.width.is_finite() || self.width <= min_width {
            return Err(BoxChartError::Config(format!(
                "chart width must be greater than {min_width}, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= min_height {
            return Err(BoxChartError::Config(format!(
                "chart height must be greater than {min_height}, got {}",
                self.height
            )));
        }
        if !self.box_height.is_finite() || self.box_height <= 0.0 {
            return Err(BoxChartError::Config(format!(
                "box height must be positive, got {}",
                self.box_height
            )));
        }
        let plot_height = self.height - min_height;
        if self.box_height + CURVE_GAP >= plot_height {
            return Err(BoxChartError::Config(format!(
                "box height {} leaves no room for the histogram in a {plot_height}px plot area",
                self.box_height
            )));
        }
        if !(self.style.point_radius.is_finite() && self.style.point_radius > 0.0) {
            return Err(BoxChartError::Config(format!(
                "point radius must be positive, got {}",
                self.style.point_radius
            )));
        }
        if !(0.0..=1.0).contains(&self.style.point_opacity) {
            return Err(BoxChartError::Config(format!(
                "point opacity must be between 0 and 1, got {}",
                self.style.point_opacity
            )));
        }
        Ok(())
    }
}

/// Pixel geometry derived from the options, relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub frame: Frame,
    pub plot_width: f64,
    pub plot_height: f64,
    pub box_height: f64,
    pub box_top: f64,
    pub box_bottom: f64,
    /// Baseline of the histogram curve (zero count).
    pub curve_base: f64,
}

impl ChartLayout {
    #[must_use]
    pub fn new(options: &ChartOptions) -> Self {
        let frame = Frame {
            width: options.width,
            height: options.height,
            margin: Margin::default(),
        };
        let plot_height = frame.inner_height();
        Self {
            frame,
            plot_width: frame.inner_width(),
            plot_height,
            box_height: options.box_height,
            box_top: plot_height - (BOX_OFFSET + options.box_height),
            box_bottom: plot_height - BOX_OFFSET,
            curve_base: plot_height - (options.box_height + CURVE_GAP),
        }
    }

    #[must_use]
    pub fn box_middle(&self) -> f64 {
        self.box_top + self.box_height / 2.0
    }

    /// Vertical extent of the fence brackets as `(upper y, lower y)`.
    #[must_use]
    pub fn bracket_span(&self) -> (f64, f64) {
        let inset = self.box_height * BRACKET_INSET;
        (self.box_top + inset, self.box_bottom - inset)
    }
}

/// Plans a box chart and drives a render port.
#[derive(Debug, Clone)]
pub struct BoxChart {
    options: ChartOptions,
    layout: ChartLayout,
}

impl BoxChart {
    /// # Errors
    /// Returns `Config` if the options fail validation.
    pub fn new(options: ChartOptions) -> Result<Self> {
        options.validate()?;
        let layout = ChartLayout::new(&options);
        Ok(Self { options, layout })
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub const fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Maps the plotted extent onto the plot width.
    #[must_use]
    pub fn x_scale(&self, summary: &Summary) -> LinearScale {
        let domain = summary
            .plotted_extent()
            .unwrap_or((summary.min, summary.max));
        LinearScale::new(domain, (0.0, self.layout.plot_width))
    }

    /// Maps bin counts onto the space above the box, larger counts higher up.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn y_scale(&self, histogram: &Histogram) -> LinearScale {
        LinearScale::new(
            (0.0, histogram.max_count() as f64),
            (self.layout.curve_base, 0.0),
        )
    }

    /// Issues every drawing call for the analysis.
    pub fn draw<P: RenderPort + ?Sized>(&self, analysis: &Analysis, port: &mut P) {
        let summary = &analysis.summary;
        let x = self.x_scale(summary);
        let y = self.y_scale(&analysis.histogram);

        if let Some(title) = &self.options.title {
            port.heading(title);
        }
        port.begin(&self.layout.frame);

        self.draw_histogram(&analysis.histogram, &x, &y, port);
        self.draw_points(summary, &x, port);
        self.draw_box(&summary.stats, &x, port);
        self.draw_whiskers(summary, &x, port);
        self.draw_fences(&summary.stats, &x, port);
        self.draw_axes(&x, &y, port);

        if self.options.table {
            let rows: Vec<TableRow> = summary
                .stats
                .table_rows()
                .into_iter()
                .map(|(label, value)| TableRow::new(label, value))
                .collect();
            port.table(&rows);
        }

        tracing::debug!(
            points = summary.plotted.len(),
            bins = analysis.histogram.len(),
            lower_fence_drawn = summary.stats.draws_lower_fence(),
            "drew box chart"
        );
    }

    fn box_style(&self) -> ShapeStyle {
        ShapeStyle::stroked(self.options.style.box_color.clone(), 2.0)
    }

    fn draw_histogram<P: RenderPort + ?Sized>(
        &self,
        histogram: &Histogram,
        x: &LinearScale,
        y: &LinearScale,
        port: &mut P,
    ) {
        let mut points = vec![(0.0, y.range().0)];
        points.extend(
            histogram
                .midpoints()
                .into_iter()
                .map(|(mid, count)| (x.map(mid), y.map(count))),
        );
        let style = ShapeStyle::stroked(self.options.style.histogram_color.clone(), 1.0);
        port.shape(&Shape::Curve(points), &style);
    }

    fn draw_points<P: RenderPort + ?Sized>(&self, summary: &Summary, x: &LinearScale, port: &mut P) {
        let cy = self.layout.box_middle();
        let points: Vec<BoundPoint> = summary
            .plotted
            .iter()
            .map(|&value| BoundPoint {
                value,
                x: x.map(value),
                y: cy,
            })
            .collect();
        let style = ShapeStyle::stroked(self.options.style.point_color.clone(), 1.0)
            .with_opacity(self.options.style.point_opacity);
        port.markers(
            Marker::Circle {
                radius: self.options.style.point_radius,
            },
            &points,
            &style,
        );
    }

    fn draw_box<P: RenderPort + ?Sized>(&self, stats: &BoxStats, x: &LinearScale, port: &mut P) {
        let (top, bottom) = (self.layout.box_top, self.layout.box_bottom);
        let style = self.box_style();
        port.shape(&Shape::rectangle(x.map(stats.q1), top, x.map(stats.q3), bottom), &style);

        let median = x.map(stats.q2);
        port.shape(&Shape::segment((median, top), (median, bottom)), &style);
    }

    fn draw_whiskers<P: RenderPort + ?Sized>(&self, summary: &Summary, x: &LinearScale, port: &mut P) {
        let stats = &summary.stats;
        let (low, high) = summary.filtered_extent().unwrap_or((stats.q1, stats.q3));
        let cy = self.layout.box_middle();
        let style = self.box_style();

        port.shape(
            &Shape::segment((x.map(stats.q1), cy), (x.map(stats.q1.min(low)), cy)),
            &style,
        );
        port.shape(
            &Shape::segment((x.map(stats.q3), cy), (x.map(high), cy)),
            &style,
        );
    }

    fn draw_fences<P: RenderPort + ?Sized>(&self, stats: &BoxStats, x: &LinearScale, port: &mut P) {
        let style = self.box_style();
        port.shape(&self.bracket(x.map(stats.upper_fence), -BRACKET_WIDTH), &style);
        if stats.draws_lower_fence() {
            port.shape(&self.bracket(x.map(stats.lower_fence), BRACKET_WIDTH), &style);
        }
    }

    /// Square bracket at `at`, opening towards `at + reach`.
    fn bracket(&self, at: f64, reach: f64) -> Shape {
        let (upper, lower) = self.layout.bracket_span();
        Shape::Polyline(vec![
            (at + reach, lower),
            (at, lower),
            (at, upper),
            (at + reach, upper),
        ])
    }

    fn draw_axes<P: RenderPort + ?Sized>(&self, x: &LinearScale, y: &LinearScale, port: &mut P) {
        let color = self.options.style.axis_color.clone();
        let bottom = Axis::bottom(self.layout.plot_height, 0.0, self.layout.plot_width)
            .with_ticks(labelled_ticks(x, X_TICKS))
            .with_color(color.clone());
        port.axis(&bottom);

        let (base, top) = y.range();
        let left = Axis::left(0.0, base, top)
            .with_ticks(labelled_ticks(y, Y_TICKS))
            .with_color(color);
        port.axis(&left);
    }
}

/// Tick pixel positions paired with their labels.
fn labelled_ticks(scale: &LinearScale, count: usize) -> Vec<(f64, String)> {
    scale
        .ticks(count)
        .into_iter()
        .map(|tick| (scale.map(tick), format_value(tick)))
        .collect()
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
