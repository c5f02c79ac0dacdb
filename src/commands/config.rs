use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, Margin, PaletteOverflow, validate_config_semantics};
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StreamChartError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(StreamChartError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let loaded = load_config(config_path, cli.no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => {
            let source = loaded
                .source
                .as_deref()
                .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string());
            Ok(format_config_text(&loaded.config, &source))
        }
    }
}

fn write_margin(output: &mut String, name: &str, margin: &Margin) {
    let _ = writeln!(
        output,
        "  {name} = {{ top = {}, right = {}, bottom = {}, left = {} }}",
        margin.top, margin.right, margin.bottom, margin.left
    );
}

#[must_use]
pub fn format_config_text(config: &Config, source: &str) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let _ = writeln!(output, "Source: {source}\n");

    output.push_str("[chart]\n");
    let _ = writeln!(output, "  width = {}", config.chart.width);
    let _ = writeln!(output, "  height = {}", config.chart.height);
    write_margin(&mut output, "margin", &config.chart.margin);
    let _ = writeln!(output, "  axis_font_size = {}", config.chart.axis_font_size);
    let _ = writeln!(output, "  x_ticks = {}", config.chart.x_ticks);

    output.push_str("\n[palette]\n");
    let _ = writeln!(output, "  colors = {:?}", config.palette.colors);
    let overflow = match config.palette.overflow {
        PaletteOverflow::Cycle => "cycle",
        PaletteOverflow::Reject => "reject",
    };
    let _ = writeln!(output, "  overflow = \"{overflow}\"");

    output.push_str("\n[data]\n");
    let _ = writeln!(output, "  date_format = \"{}\"", config.data.date_format);

    output.push_str("\n[hover]\n");
    let _ = writeln!(output, "  opacity = {}", config.hover.opacity);
    let _ = writeln!(output, "  tooltip_offset = {}", config.hover.tooltip_offset);

    output.push_str("\n[mini_chart]\n");
    let _ = writeln!(output, "  plot_width = {}", config.mini_chart.plot_width);
    let _ = writeln!(output, "  plot_height = {}", config.mini_chart.plot_height);
    write_margin(&mut output, "margin", &config.mini_chart.margin);
    let _ = writeln!(output, "  padding = {}", config.mini_chart.padding);
    let _ = writeln!(output, "  y_ticks = {}", config.mini_chart.y_ticks);
    let _ = writeln!(output, "  font_size = {}", config.mini_chart.font_size);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
