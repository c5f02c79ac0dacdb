//! Primitive SVG elements: axes, bars, areas and groups.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};
use crate::layout::format_coord as px;

/// Which side of the plot an axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Axis drawn at the origin of its group; position it with a [`Group`].
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    /// Pixel extent of the domain line.
    pub range: (f64, f64),
    /// Tick offsets along the axis and their labels.
    pub ticks: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_size: f64,
    pub font_size: f64,
    /// Extra distance pushing labels away from the axis line.
    pub label_shift: f64,
}

impl Axis {
    fn new(orientation: AxisOrientation, range: (f64, f64)) -> Self {
        Self {
            orientation,
            range,
            ticks: Vec::new(),
            color: ChartColor::CurrentColor,
            tick_size: 6.0,
            font_size: 10.0,
            label_shift: 0.0,
        }
    }

    #[must_use]
    pub fn bottom(range: (f64, f64)) -> Self {
        Self::new(AxisOrientation::Bottom, range)
    }

    #[must_use]
    pub fn left(range: (f64, f64)) -> Self {
        Self::new(AxisOrientation::Left, range)
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

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_label_shift(mut self, shift: f64) -> Self {
        self.label_shift = shift;
        self
    }

    const fn class(&self) -> &'static str {
        match self.orientation {
            AxisOrientation::Bottom => "x-axis",
            AxisOrientation::Left => "y-axis",
        }
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let k = self.tick_size;
        match self.orientation {
            AxisOrientation::Bottom => {
                format!("M{},{}V0H{}V{}", px(r0), px(k), px(r1), px(k))
            }
            AxisOrientation::Left => {
                format!("M{},{}H0V{}H{}", px(-k), px(r0), px(r1), px(-k))
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();
        let spacing = self.tick_size + 3.0 + self.label_shift;

        let _ = writeln!(
            output,
            r#"<g class="{}" fill="none" font-size="{}" font-family="sans-serif">"#,
            self.class(),
            px(self.font_size)
        );
        let _ = writeln!(
            output,
            r#"    <path class="domain" stroke="{color}" d="{}"/>"#,
            self.domain_path()
        );

        for (offset, label) in &self.ticks {
            let label = html_escape(label);
            let (transform, line, text) = match self.orientation {
                AxisOrientation::Bottom => (
                    format!("translate({},0)", px(*offset)),
                    format!(r#"y2="{}""#, px(self.tick_size)),
                    format!(
                        r#"y="{}" dy="0.71em" text-anchor="{}""#,
                        px(spacing),
                        TextAnchor::Middle
                    ),
                ),
                AxisOrientation::Left => (
                    format!("translate(0,{})", px(*offset)),
                    format!(r#"x2="{}""#, px(-self.tick_size)),
                    format!(
                        r#"x="{}" dy="0.32em" text-anchor="{}""#,
                        px(-spacing),
                        TextAnchor::End
                    ),
                ),
            };
            let _ = writeln!(
                output,
                r#"    <g class="tick" transform="{transform}"><line stroke="{color}" {line}/><text fill="{color}" {text}>{label}</text></g>"#
            );
        }

        output.push_str("</g>");
        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: i64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // <title> gives a native hover hint with the exact value
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}"><title>{escaped_label}: {}</title></rect>"#,
            px(self.x),
            px(self.y),
            px(self.width),
            px(self.height.max(0.0)),
            self.value
        )
    }
}

/// A filled streamgraph layer.
#[derive(Debug, Clone)]
pub struct Area {
    pub d: String,
    pub color: ChartColor,
    pub key: String,
    pub index: usize,
    pub opacity: f64,
}

impl SvgElement for Area {
    fn render(&self) -> String {
        let mut output = format!(
            r#"<path class="layer" data-key-index="{}" data-key="{}" fill="{}" d="{}""#,
            self.index,
            html_escape(&self.key),
            self.color.to_css(),
            self.d
        );
        if self.opacity < 1.0 {
            let _ = write!(output, r#" style="opacity: {}""#, px(self.opacity));
        }
        let _ = write!(output, "><title>{}</title></path>", html_escape(&self.key));
        output
    }
}

/// Centered text, used for placeholder messages.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: ChartColor,
    pub font_size: f64,
}

impl SvgElement for Label {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            px(self.x),
            px(self.y),
            TextAnchor::Middle,
            self.color.to_css(),
            px(self.font_size),
            html_escape(&self.text)
        )
    }
}

/// Translated container for child elements.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub translate: (f64, f64),
    pub class: Option<String>,
    children: Vec<String>,
}

impl Group {
    #[must_use]
    pub fn translated(x: f64, y: f64) -> Self {
        Self {
            translate: (x, y),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.children.push(element.render());
        self
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let mut output = String::from("<g");
        if let Some(class) = &self.class {
            let _ = write!(output, r#" class="{}""#, html_escape(class));
        }
        let _ = writeln!(
            output,
            r#" transform="translate({},{})">"#,
            px(self.translate.0),
            px(self.translate.1)
        );
        for child in &self.children {
            for line in child.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }
        output.push_str("</g>");
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
