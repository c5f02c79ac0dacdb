use serde::{Deserialize, Serialize};

/// Default palette: red, blue, green, purple, orange.
pub const DEFAULT_PALETTE: [&str; 5] = ["#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00"];

/// Default date layout of the first CSV column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Root configuration loaded from `.streamchart.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub palette: PaletteConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub mini_chart: MiniChartConfig,
}

/// Inner spacing between an outer frame and its plot area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Main streamgraph geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    /// Outer SVG width in pixels, margins included.
    #[serde(default = "default_chart_width")]
    pub width: f64,

    /// Outer SVG height in pixels, margins included.
    #[serde(default = "default_chart_height")]
    pub height: f64,

    #[serde(default = "default_chart_margin")]
    pub margin: Margin,

    /// Font size of the month labels under the chart.
    #[serde(default = "default_axis_font_size")]
    pub axis_font_size: f64,

    /// Approximate number of ticks requested from the time scale.
    #[serde(default = "default_x_ticks")]
    pub x_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            margin: default_chart_margin(),
            axis_font_size: default_axis_font_size(),
            x_ticks: default_x_ticks(),
        }
    }
}

/// What to do when there are more series than palette colors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaletteOverflow {
    /// Wrap around and reuse colors from the start of the palette.
    #[default]
    Cycle,
    /// Refuse to draw and render a placeholder instead.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    #[serde(default = "default_palette")]
    pub colors: Vec<String>,

    #[serde(default)]
    pub overflow: PaletteOverflow,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_palette(),
            overflow: PaletteOverflow::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// strftime-style layout of the date column.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

/// Pointer interaction constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HoverConfig {
    /// Opacity applied to the hovered area.
    #[serde(default = "default_hover_opacity")]
    pub opacity: f64,

    /// Distance in pixels between the pointer and the tooltip's top-left corner.
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            opacity: default_hover_opacity(),
            tooltip_offset: default_tooltip_offset(),
        }
    }
}

/// Geometry of the mini bar chart shown inside the tooltip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MiniChartConfig {
    /// Plot area width, margins excluded.
    #[serde(default = "default_mini_width")]
    pub plot_width: f64,

    /// Plot area height, margins excluded.
    #[serde(default = "default_mini_height")]
    pub plot_height: f64,

    #[serde(default = "default_mini_margin")]
    pub margin: Margin,

    /// Band padding, applied both between bars and at the outer edges.
    #[serde(default = "default_band_padding")]
    pub padding: f64,

    #[serde(default = "default_y_ticks")]
    pub y_ticks: usize,

    #[serde(default = "default_mini_font_size")]
    pub font_size: f64,
}

impl Default for MiniChartConfig {
    fn default() -> Self {
        Self {
            plot_width: default_mini_width(),
            plot_height: default_mini_height(),
            margin: default_mini_margin(),
            padding: default_band_padding(),
            y_ticks: default_y_ticks(),
            font_size: default_mini_font_size(),
        }
    }
}

const fn default_chart_width() -> f64 {
    400.0
}

const fn default_chart_height() -> f64 {
    400.0
}

const fn default_chart_margin() -> Margin {
    Margin::new(20.0, 20.0, 40.0, 20.0)
}

const fn default_axis_font_size() -> f64 {
    10.0
}

const fn default_x_ticks() -> usize {
    10
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

const fn default_hover_opacity() -> f64 {
    0.8
}

const fn default_tooltip_offset() -> f64 {
    15.0
}

const fn default_mini_width() -> f64 {
    150.0
}

const fn default_mini_height() -> f64 {
    100.0
}

const fn default_mini_margin() -> Margin {
    Margin::new(10.0, 10.0, 20.0, 30.0)
}

const fn default_band_padding() -> f64 {
    0.2
}

const fn default_y_ticks() -> usize {
    5
}

const fn default_mini_font_size() -> f64 {
    8.0
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
