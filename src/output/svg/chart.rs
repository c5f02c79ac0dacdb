//! Composite charts: the streamgraph, its empty placeholder and the mini bar chart.

use super::builder::SvgBuilder;
use super::element::{Area, Axis, Bar, Group, Label, SvgElement};
use super::style::ChartColor;
use crate::chart::{HoverState, MiniBarChart};
use crate::layout::{AxisTick, ChartLayout, EmptyReason, Frame, RenderOutcome};

/// Axis labels sit this far below their tick marks.
const LABEL_SHIFT: f64 = 5.0;

fn tick_labels(ticks: &[AxisTick]) -> Vec<(f64, String)> {
    ticks
        .iter()
        .map(|t| (t.offset, t.label.clone()))
        .collect()
}

/// Stacked areas with a month axis underneath.
#[derive(Debug)]
pub struct StreamgraphChart<'a> {
    pub layout: &'a ChartLayout,
    /// Current pointer state; areas are drawn fully opaque without it.
    pub hover: Option<&'a HoverState>,
    pub axis_font_size: f64,
}

impl SvgElement for StreamgraphChart<'_> {
    fn render(&self) -> String {
        let frame = &self.layout.frame;
        let mut plot = Group::translated(frame.margin.left, frame.margin.top);

        for (index, layer) in self.layout.layers.iter().enumerate() {
            let opacity = self
                .hover
                .and_then(|h| h.opacity(index))
                .unwrap_or(1.0);
            plot = plot.push_element(&Area {
                d: layer.path.clone(),
                color: ChartColor::hex(&layer.color),
                key: layer.key.clone(),
                index,
                opacity,
            });
        }

        let axis = Axis::bottom((0.0, frame.inner_width()))
            .with_ticks(tick_labels(&self.layout.x_ticks))
            .with_font_size(self.axis_font_size)
            .with_label_shift(LABEL_SHIFT);
        plot = plot.push_element(&Group::translated(0.0, frame.inner_height()).push_element(&axis));

        SvgBuilder::new(frame.width, frame.height)
            .with_class("streamgraph")
            .with_title(self.layout.keys.join(", "))
            .push_element(&plot)
            .build()
    }
}

/// Fixed-size frame with a message explaining why there is no chart.
#[derive(Debug)]
pub struct PlaceholderChart<'a> {
    pub frame: &'a Frame,
    pub reason: &'a EmptyReason,
}

impl SvgElement for PlaceholderChart<'_> {
    fn render(&self) -> String {
        let message = self.reason.to_string();
        SvgBuilder::new(self.frame.width, self.frame.height)
            .with_class("streamgraph empty")
            .with_title(message.clone())
            .push_element(&Label {
                x: self.frame.width / 2.0,
                y: self.frame.height / 2.0,
                text: message,
                color: ChartColor::css_var("text-muted", "#64748b"),
                font_size: 14.0,
            })
            .build()
    }
}

/// Monthly bars of one series, as shown in the tooltip.
#[derive(Debug)]
pub struct MiniChartSvg<'a> {
    pub chart: &'a MiniBarChart,
}

impl SvgElement for MiniChartSvg<'_> {
    fn render(&self) -> String {
        let chart = self.chart;
        let frame = &chart.frame;
        let plot_height = frame.inner_height();
        let color = ChartColor::hex(&chart.color);

        let mut plot = Group::translated(frame.margin.left, frame.margin.top);
        for bar in &chart.bars {
            plot = plot.push_element(&Bar {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                color: color.clone(),
                label: bar.month.clone(),
                value: bar.value,
            });
        }

        let x_axis = Axis::bottom((0.0, frame.inner_width()))
            .with_ticks(tick_labels(&chart.x_ticks))
            .with_font_size(chart.font_size)
            .with_label_shift(LABEL_SHIFT);
        let y_axis = Axis::left((plot_height, 0.0)).with_ticks(tick_labels(&chart.y_ticks));
        plot = plot
            .push_element(&Group::translated(0.0, plot_height).push_element(&x_axis))
            .push_element(&y_axis);

        SvgBuilder::new(frame.width, frame.height)
            .with_class("mini-chart")
            .with_title(chart.key.clone())
            .push_element(&plot)
            .build()
    }
}

/// The chart for `outcome`, or its placeholder.
#[must_use]
pub fn render_outcome(
    outcome: &RenderOutcome,
    hover: Option<&HoverState>,
    axis_font_size: f64,
) -> String {
    match outcome {
        RenderOutcome::Chart(layout) => StreamgraphChart {
            layout,
            hover,
            axis_font_size,
        }
        .render(),
        RenderOutcome::Empty { frame, reason } => PlaceholderChart { frame, reason }.render(),
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
