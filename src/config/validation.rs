//! Configuration semantic validation.
//!
//! Range checks and cross-field constraints that TOML parsing alone cannot express.

use chrono::format::{Item, StrftimeItems};

use crate::config::{Config, Margin};
use crate::{Result, StreamChartError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if sizes are not positive, margins leave no plot area,
/// opacity or padding are out of range, the palette is empty or malformed,
/// or the date format cannot be understood.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_chart_section(config)?;
    validate_palette_section(config)?;
    validate_date_format(&config.data.date_format)?;
    validate_hover_section(config)?;
    validate_mini_chart_section(config)?;
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;
    require_positive("chart.width", chart.width)?;
    require_positive("chart.height", chart.height)?;
    validate_margin("chart.margin", &chart.margin)?;

    if chart.margin.left + chart.margin.right >= chart.width {
        return Err(StreamChartError::Config(format!(
            "chart.margin left + right ({}) must be less than chart.width ({})",
            chart.margin.left + chart.margin.right,
            chart.width
        )));
    }
    if chart.margin.top + chart.margin.bottom >= chart.height {
        return Err(StreamChartError::Config(format!(
            "chart.margin top + bottom ({}) must be less than chart.height ({})",
            chart.margin.top + chart.margin.bottom,
            chart.height
        )));
    }
    require_positive("chart.axis_font_size", chart.axis_font_size)?;
    if chart.x_ticks == 0 {
        return Err(StreamChartError::Config(
            "chart.x_ticks must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_palette_section(config: &Config) -> Result<()> {
    if config.palette.colors.is_empty() {
        return Err(StreamChartError::Config(
            "palette.colors must contain at least one color".to_string(),
        ));
    }
    for (i, color) in config.palette.colors.iter().enumerate() {
        if !is_hex_color(color) {
            return Err(StreamChartError::Config(format!(
                "palette.colors[{i}] must be a #rgb or #rrggbb color, got '{color}'"
            )));
        }
    }
    Ok(())
}

/// Validates a strftime-style date layout.
///
/// # Errors
/// Returns `InvalidDateFormat` if the layout has no specifier or contains an invalid one.
pub fn validate_date_format(format: &str) -> Result<()> {
    let mut has_specifier = false;
    for item in StrftimeItems::new(format) {
        match item {
            Item::Error => {
                return Err(StreamChartError::InvalidDateFormat {
                    format: format.to_string(),
                    reason: "contains an unknown specifier".to_string(),
                });
            }
            Item::Numeric(..) | Item::Fixed(_) => has_specifier = true,
            _ => {}
        }
    }
    if !has_specifier {
        return Err(StreamChartError::InvalidDateFormat {
            format: format.to_string(),
            reason: "contains no date specifier".to_string(),
        });
    }
    Ok(())
}

fn validate_hover_section(config: &Config) -> Result<()> {
    if !(0.0..=1.0).contains(&config.hover.opacity) {
        return Err(StreamChartError::Config(format!(
            "hover.opacity must be between 0.0 and 1.0, got {}",
            config.hover.opacity
        )));
    }
    if !config.hover.tooltip_offset.is_finite() {
        return Err(StreamChartError::Config(
            "hover.tooltip_offset must be a finite number".to_string(),
        ));
    }
    Ok(())
}

fn validate_mini_chart_section(config: &Config) -> Result<()> {
    let mini = &config.mini_chart;
    require_positive("mini_chart.plot_width", mini.plot_width)?;
    require_positive("mini_chart.plot_height", mini.plot_height)?;
    validate_margin("mini_chart.margin", &mini.margin)?;
    if !(0.0..1.0).contains(&mini.padding) {
        return Err(StreamChartError::Config(format!(
            "mini_chart.padding must be in [0.0, 1.0), got {}",
            mini.padding
        )));
    }
    require_positive("mini_chart.font_size", mini.font_size)?;
    Ok(())
}

fn validate_margin(name: &str, margin: &Margin) -> Result<()> {
    for (side, value) in [
        ("top", margin.top),
        ("right", margin.right),
        ("bottom", margin.bottom),
        ("left", margin.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(StreamChartError::Config(format!(
                "{name}.{side} must be a non-negative number, got {value}"
            )));
        }
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StreamChartError::Config(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

fn is_hex_color(color: &str) -> bool {
    color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    })
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
