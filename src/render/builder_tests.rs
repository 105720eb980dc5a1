//! Tests for SVG composition builder.

use super::*;
use crate::render::element::CircleElement;
use crate::render::style::{ChartColor, ShapeStyle};

#[test]
fn builder_creates_svg() {
    let svg = SvgBuilder::new(200.0, 100.0)
        .with_title("Custom SVG")
        .build();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("viewBox=\"0 0 200 100\""));
    assert!(svg.contains("width=\"200\""));
    assert!(svg.contains("<title>Custom SVG</title>"));
    assert!(svg.ends_with("</svg>"));
    // No static IDs
    assert!(!svg.contains("id=\""));
}

#[test]
fn builder_translates_plot_group() {
    let svg = SvgBuilder::new(100.0, 100.0).with_offset(30.0, 10.0).build();
    assert!(svg.contains(r#"<g class="box-area" transform="translate(30, 10)">"#));
}

#[test]
fn builder_adds_elements() {
    let circle = CircleElement {
        cx: 10.0,
        cy: 10.0,
        r: 5.0,
        style: ShapeStyle::stroked(ChartColor::hex("#000"), 1.0),
        title: None,
    };

    let mut builder = SvgBuilder::new(100.0, 100.0);
    builder.add_element(&circle);
    let svg = builder.build();

    assert!(svg.contains("<circle"));
}

#[test]
fn builder_skips_empty_elements() {
    let mut builder = SvgBuilder::new(10.0, 10.0);
    builder.add_element(&crate::render::element::PathElement {
        data: String::new(),
        style: ShapeStyle::stroked(ChartColor::hex("#000"), 1.0),
    });
    let svg = builder.build();
    assert!(!svg.contains("<path"));
}

#[test]
fn untitled_svg_has_no_title() {
    let svg = SvgBuilder::new(10.0, 10.0).build();
    assert!(!svg.contains("<title>"));
}
