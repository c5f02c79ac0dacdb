//! Output writers: the HTML page, bare SVG, JSON layout dumps and dataset summaries.

mod error_output;
mod html;
mod html_template;
mod json;
pub mod svg;
mod text;

pub use error_output::{ErrorOutput, report_error};
pub use html::HtmlFormatter;
pub use json::{JsonFormatter, SummaryJsonFormatter};
pub use text::SummaryTextFormatter;

use crate::chart::StreamChart;
use crate::error::Result;
use crate::ingest::DatasetSummary;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against a concrete stream.
    #[must_use]
    pub fn enabled_for(self, stream_is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // https://no-color.org: presence of the variable disables color
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && stream_is_terminal,
        }
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Turns a rendered chart into a document.
pub trait ChartFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, chart: &StreamChart) -> Result<String>;
}

/// Turns a dataset summary into a report.
pub trait SummaryFormatter {
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, summary: &DatasetSummary) -> Result<String>;
}

/// Standalone SVG of the current chart state.
pub struct SvgFormatter;

impl ChartFormatter for SvgFormatter {
    fn format(&self, chart: &StreamChart) -> Result<String> {
        let Some(outcome) = chart.outcome() else {
            return Ok(String::new());
        };
        let mut svg = svg::render_outcome(
            outcome,
            Some(chart.hover()),
            chart.config().chart.axis_font_size,
        );
        svg.push('\n');
        Ok(svg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Svg,
    Json,
}

impl OutputFormat {
    /// Boxed formatter for this format.
    #[must_use]
    pub fn formatter(self, title: &str) -> Box<dyn ChartFormatter> {
        match self {
            Self::Html => Box::new(HtmlFormatter::new(title)),
            Self::Svg => Box::new(SvgFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

impl SummaryFormat {
    #[must_use]
    pub fn formatter(self, mode: ColorMode) -> Box<dyn SummaryFormatter> {
        match self {
            Self::Text => Box::new(SummaryTextFormatter::new(mode)),
            Self::Json => Box::new(SummaryJsonFormatter),
        }
    }
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown summary format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
