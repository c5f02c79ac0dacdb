//! Streamgraph layout: from records to stacked, scaled, pixel-space geometry.
//!
//! [`compute_layout`] is a pure function of the dataset and configuration;
//! every render recomputes it from scratch.

mod curve;
mod palette;
mod scale;
mod stack;
mod ticks;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{Config, Margin};
use crate::ingest::Dataset;

pub use curve::{PathData, basis_area, format_coord};
pub use palette::{PaletteExhausted, assign_colors};
pub use scale::{BandScale, LinearScale, TimeScale};
pub use stack::{StackPoint, stack_wiggle, wiggle_offsets};
pub use ticks::{
    TimeInterval, format_linear_tick, linear_ticks, tick_step, time_interval, time_ticks,
};

/// Month abbreviation used for every date label.
pub const MONTH_LABEL_FORMAT: &str = "%b";

/// Outer size of a chart and the margins around its plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

/// One stacked series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub key: String,
    pub color: String,
    /// Stacked values, aligned with [`ChartLayout::rows`].
    pub points: Vec<StackPoint>,
    /// SVG path data in plot-area coordinates.
    pub path: String,
}

/// A record that made it onto the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlottedRow {
    pub date: NaiveDate,
    /// Series values in key order.
    pub values: Vec<i64>,
}

/// Axis tick at a pixel offset along its axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub frame: Frame,
    pub keys: Vec<String>,
    pub layers: Vec<Layer>,
    pub rows: Vec<PlottedRow>,
    pub x: TimeScale,
    pub y: LinearScale,
    pub x_ticks: Vec<AxisTick>,
    /// Records dropped because their date did not parse.
    pub skipped_rows: usize,
}

impl ChartLayout {
    /// Values of one series across the plotted rows, paired with their date.
    pub fn series(&self, index: usize) -> impl Iterator<Item = (NaiveDate, i64)> + '_ {
        self.rows
            .iter()
            .map(move |row| (row.date, row.values.get(index).copied().unwrap_or(0)))
    }
}

/// Why nothing could be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyReason {
    NoRecords,
    NoSeries,
    NoValidDates { skipped: usize },
    TooManySeries { series: usize, palette: usize },
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecords => write!(f, "No data available"),
            Self::NoSeries => write!(f, "No series columns to plot"),
            Self::NoValidDates { skipped } => {
                write!(f, "No rows with a valid date ({skipped} skipped)")
            }
            Self::TooManySeries { series, palette } => {
                write!(f, "Too many series: {series} series, {palette} colors")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenderOutcome {
    Chart(ChartLayout),
    Empty { frame: Frame, reason: EmptyReason },
}

impl RenderOutcome {
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        match self {
            Self::Chart(layout) => &layout.frame,
            Self::Empty { frame, .. } => frame,
        }
    }

    #[must_use]
    pub const fn layout(&self) -> Option<&ChartLayout> {
        match self {
            Self::Chart(layout) => Some(layout),
            Self::Empty { .. } => None,
        }
    }
}

/// Parse a date literal with an exact layout.
#[must_use]
pub fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, format).ok()
}

/// Stack, scale and trace every series of `dataset`.
#[must_use]
pub fn compute_layout(dataset: &Dataset, config: &Config) -> RenderOutcome {
    let frame = Frame::new(config.chart.width, config.chart.height, config.chart.margin);
    let empty = |reason: EmptyReason| {
        debug!(%reason, "nothing to draw");
        RenderOutcome::Empty { frame, reason }
    };

    let Some(keys) = dataset.series_keys() else {
        return empty(EmptyReason::NoRecords);
    };
    if keys.is_empty() {
        return empty(EmptyReason::NoSeries);
    }

    let colors = match assign_colors(keys.len(), &config.palette) {
        Ok(colors) => colors,
        Err(PaletteExhausted { series, palette }) => {
            warn!(series, palette, "too many series for the palette");
            return empty(EmptyReason::TooManySeries { series, palette });
        }
    };

    let (rows, skipped_rows) = plotted_rows(dataset, &keys, &config.data.date_format);
    let Some(x) = TimeScale::from_extent(
        rows.iter().map(|row| row.date),
        (0.0, frame.inner_width()),
    ) else {
        return empty(EmptyReason::NoValidDates {
            skipped: skipped_rows,
        });
    };

    #[allow(clippy::cast_precision_loss)]
    let values: Vec<Vec<f64>> = (0..keys.len())
        .map(|i| rows.iter().map(|row| row.values[i] as f64).collect())
        .collect();
    let stacked = stack_wiggle(&values);

    let (low, high) = stacked
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.baseline), hi.max(p.topline))
        });
    let y = LinearScale::new((low, high), (frame.inner_height(), 0.0));

    let layers = keys
        .iter()
        .zip(colors)
        .zip(stacked)
        .map(|((key, color), points)| {
            let top: Vec<(f64, f64)> = rows
                .iter()
                .zip(&points)
                .map(|(row, p)| (x.apply(row.date), y.apply(p.topline)))
                .collect();
            let bottom: Vec<(f64, f64)> = rows
                .iter()
                .zip(&points)
                .map(|(row, p)| (x.apply(row.date), y.apply(p.baseline)))
                .collect();
            Layer {
                key: key.clone(),
                color,
                path: basis_area(&top, &bottom),
                points,
            }
        })
        .collect();

    let x_ticks = x
        .ticks(config.chart.x_ticks)
        .into_iter()
        .map(|date| AxisTick {
            offset: x.apply(date),
            label: date.format(MONTH_LABEL_FORMAT).to_string(),
        })
        .collect();

    debug!(
        series = keys.len(),
        rows = rows.len(),
        skipped_rows,
        "computed streamgraph layout"
    );

    RenderOutcome::Chart(ChartLayout {
        frame,
        keys,
        layers,
        rows,
        x,
        y,
        x_ticks,
        skipped_rows,
    })
}

fn plotted_rows(dataset: &Dataset, keys: &[String], format: &str) -> (Vec<PlottedRow>, usize) {
    let mut rows = Vec::with_capacity(dataset.len());
    let mut skipped = 0;

    for (line, record) in dataset.records.iter().enumerate() {
        let literal = record.date().unwrap_or_default();
        let Some(date) = parse_date(literal, format) else {
            warn!(row = line + 1, date = literal, format, "skipping row with unparseable date");
            skipped += 1;
            continue;
        };
        rows.push(PlottedRow {
            date,
            values: keys.iter().map(|key| record.number(key)).collect(),
        });
    }

    (rows, skipped)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
