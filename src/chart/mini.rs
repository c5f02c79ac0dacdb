//! Per-series monthly bar chart shown in the tooltip.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::MiniChartConfig;
use crate::layout::{
    AxisTick, BandScale, ChartLayout, Frame, LinearScale, MONTH_LABEL_FORMAT, format_linear_tick,
    tick_step,
};

/// One month's bar, in plot-area coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniBar {
    pub month: String,
    /// Largest value of the series within the month.
    pub value: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiniBarChart {
    pub key: String,
    pub color: String,
    pub frame: Frame,
    pub x: BandScale,
    pub y: LinearScale,
    pub bars: Vec<MiniBar>,
    /// Band centres with their month label.
    pub x_ticks: Vec<AxisTick>,
    /// Vertical offsets of the value ticks.
    pub y_ticks: Vec<AxisTick>,
    pub font_size: f64,
}

impl MiniBarChart {
    /// Monthly bars for the series at `index`, `None` if there is no such series.
    ///
    /// Months are grouped by their abbreviated name and ordered as they first
    /// appear in the plotted rows.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(layout: &ChartLayout, index: usize, config: &MiniChartConfig) -> Option<Self> {
        let layer = layout.layers.get(index)?;

        let mut monthly: IndexMap<String, i64> = IndexMap::new();
        for (date, value) in layout.series(index) {
            let month = date.format(MONTH_LABEL_FORMAT).to_string();
            monthly
                .entry(month)
                .and_modify(|max| *max = (*max).max(value))
                .or_insert(value);
        }

        let peak = monthly.values().copied().max().unwrap_or(0);
        let top = if peak > 0 { peak as f64 } else { 1.0 };

        let frame = Frame::new(
            config.plot_width + config.margin.left + config.margin.right,
            config.plot_height + config.margin.top + config.margin.bottom,
            config.margin,
        );
        let x = BandScale::new(
            monthly.keys().cloned().collect(),
            (0.0, config.plot_width),
            config.padding,
        );
        let y = LinearScale::new((0.0, top), (config.plot_height, 0.0));

        let bars = monthly
            .iter()
            .filter_map(|(month, value)| {
                let left = x.position(month)?;
                let y_top = y.apply((*value).max(0) as f64);
                Some(MiniBar {
                    month: month.clone(),
                    value: *value,
                    x: left,
                    y: y_top,
                    width: x.bandwidth(),
                    height: config.plot_height - y_top,
                })
            })
            .collect();

        let x_ticks = x
            .domain
            .iter()
            .filter_map(|month| {
                x.center(month).map(|offset| AxisTick {
                    offset,
                    label: month.clone(),
                })
            })
            .collect();

        let step = tick_step(0.0, top, config.y_ticks);
        let y_ticks = y
            .ticks(config.y_ticks)
            .into_iter()
            .map(|value| AxisTick {
                offset: y.apply(value),
                label: format_linear_tick(value, step),
            })
            .collect();

        Some(Self {
            key: layer.key.clone(),
            color: layer.color.clone(),
            frame,
            x,
            y,
            bars,
            x_ticks,
            y_ticks,
            font_size: config.font_size,
        })
    }
}

#[cfg(test)]
#[path = "mini_tests.rs"]
mod tests;
