//! Tests for SVG composition builder.

use super::*;
use crate::output::svg::element::Bar;
use crate::output::svg::style::ChartColor;

#[test]
fn builder_creates_svg() {
    let svg = SvgBuilder::new(400.0, 400.0)
        .with_title("Streamgraph")
        .build();

    assert!(svg.starts_with("<svg width=\"400\" height=\"400\""));
    assert!(svg.contains("viewBox=\"0 0 400 400\""));
    assert!(svg.contains("<title>Streamgraph</title>"));
    assert!(svg.ends_with("</svg>"));
    assert!(!svg.contains("id=\""));
}

#[test]
fn builder_adds_class() {
    let svg = SvgBuilder::new(10.0, 10.0).with_class("mini-chart").build();
    assert!(svg.starts_with("<svg class=\"mini-chart\" width=\"10\""));
}

#[test]
fn builder_adds_elements() {
    let bar = Bar {
        x: 10.0,
        y: 10.0,
        width: 30.0,
        height: 50.0,
        color: ChartColor::hex("#000"),
        label: "Bar".to_string(),
        value: 50,
    };

    let svg = SvgBuilder::new(100.0, 100.0).push_element(&bar).build();
    assert!(svg.contains("    <rect"));
}
