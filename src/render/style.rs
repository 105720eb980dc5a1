//! SVG styling primitives: colors, text anchoring and stroke/fill attributes.

use std::fmt::{self, Write};

use super::format::format_coord;

/// Color specification supporting CSS variables for theming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#8e44ad")
    Hex(String),
    /// CSS variable reference (e.g., "text-muted" → "var(--color-text-muted)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }

    /// Whether a string is a `#rgb` or `#rrggbb` hex color.
    #[must_use]
    pub fn is_valid_hex(color: &str) -> bool {
        color.strip_prefix('#').is_some_and(|digits| {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Visual attributes of a drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub stroke: ChartColor,
    pub stroke_width: f64,
    /// `None` renders `fill="none"`.
    pub fill: Option<ChartColor>,
    pub opacity: Option<f64>,
}

impl ShapeStyle {
    /// Outline-only style.
    #[must_use]
    pub const fn stroked(stroke: ChartColor, stroke_width: f64) -> Self {
        Self {
            stroke,
            stroke_width,
            fill: None,
            opacity: None,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// SVG presentation attributes, space separated.
    #[must_use]
    pub fn attributes(&self) -> String {
        let fill = self
            .fill
            .as_ref()
            .map_or_else(|| "none".to_string(), ChartColor::to_css);
        let mut attrs = format!(
            r#"stroke="{}" stroke-width="{}" fill="{fill}""#,
            self.stroke.to_css(),
            format_coord(self.stroke_width)
        );
        if let Some(opacity) = self.opacity {
            let _ = write!(attrs, r#" opacity="{}""#, format_coord(opacity));
        }
        attrs
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
