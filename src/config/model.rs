use serde::{Deserialize, Serialize};

use crate::render::{ChartColor, ChartOptions, ChartStyle};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default `id` of the element a chart is rendered into.
pub const DEFAULT_NODE_ID: &str = "box-chart";

/// Chart dimensions and display toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Outer chart width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Outer chart height in pixels.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Height of the box in pixels.
    #[serde(default = "default_box_height")]
    pub box_height: f64,

    /// Restrict statistics and plotted points to the values inside the fences.
    #[serde(default)]
    pub constrain: bool,

    /// Show the fence/quartile table under the chart.
    #[serde(default)]
    pub table: bool,

    /// Attach each point's value as a hover tooltip.
    #[serde(default)]
    pub tooltips: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `id` of the element the chart is rendered into.
    #[serde(default = "default_node_id")]
    pub node_id: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            box_height: default_box_height(),
            constrain: false,
            table: false,
            tooltips: false,
            title: None,
            node_id: default_node_id(),
        }
    }
}

/// Colors (`#rgb` or `#rrggbb`) and point marker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "default_histogram_color")]
    pub histogram_color: String,

    #[serde(default = "default_point_color")]
    pub point_color: String,

    /// Box, median, whiskers and fences.
    #[serde(default = "default_box_color")]
    pub box_color: String,

    #[serde(default = "default_axis_color")]
    pub axis_color: String,

    #[serde(default = "default_point_radius")]
    pub point_radius: f64,

    /// Point opacity (0.0-1.0).
    #[serde(default = "default_point_opacity")]
    pub point_opacity: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            histogram_color: default_histogram_color(),
            point_color: default_point_color(),
            box_color: default_box_color(),
            axis_color: default_axis_color(),
            point_radius: default_point_radius(),
            point_opacity: default_point_opacity(),
        }
    }
}

impl StyleConfig {
    /// All configured colors with their key names.
    #[must_use]
    pub fn colors(&self) -> [(&'static str, &str); 4] {
        [
            ("histogram_color", &self.histogram_color),
            ("point_color", &self.point_color),
            ("box_color", &self.box_color),
            ("axis_color", &self.axis_color),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// Render options described by this configuration.
    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            title: self.chart.title.clone(),
            width: self.chart.width,
            height: self.chart.height,
            box_height: self.chart.box_height,
            constrain: self.chart.constrain,
            table: self.chart.table,
            style: ChartStyle {
                histogram_color: ChartColor::hex(&self.style.histogram_color),
                point_color: ChartColor::hex(&self.style.point_color),
                box_color: ChartColor::hex(&self.style.box_color),
                axis_color: ChartColor::hex(&self.style.axis_color),
                point_radius: self.style.point_radius,
                point_opacity: self.style.point_opacity,
            },
        }
    }
}

const fn default_width() -> f64 {
    crate::render::DEFAULT_WIDTH
}

const fn default_height() -> f64 {
    crate::render::DEFAULT_HEIGHT
}

const fn default_box_height() -> f64 {
    crate::render::DEFAULT_BOX_HEIGHT
}

fn default_node_id() -> String {
    DEFAULT_NODE_ID.to_string()
}

fn default_histogram_color() -> String {
    "#3498db".to_string()
}

fn default_point_color() -> String {
    "#1abc9c".to_string()
}

fn default_box_color() -> String {
    "#8e44ad".to_string()
}

fn default_axis_color() -> String {
    "#7f8c8d".to_string()
}

const fn default_point_radius() -> f64 {
    5.0
}

const fn default_point_opacity() -> f64 {
    0.4
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
