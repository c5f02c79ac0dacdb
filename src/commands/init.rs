use std::fs;

use tracing::info;

use crate::cli::{Cli, InitArgs};
use crate::output::report_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StreamChartError};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StreamChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    info!(path = %output_path.display(), "configuration written");

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# streamchart configuration file
# Every key is optional; the values below are the defaults.

[chart]
# Outer size of the streamgraph in pixels
width = 400.0
height = 400.0

# Space around the plot area; the bottom margin holds the month axis
margin = { top = 20.0, right = 20.0, bottom = 40.0, left = 20.0 }

axis_font_size = 10.0

# Approximate number of month ticks on the x axis
x_ticks = 10

[palette]
# One color per series, in column order
colors = ["#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00"]

# More series than colors: "cycle" reuses colors, "reject" renders a notice instead
overflow = "cycle"

[data]
# strftime layout of the first column
date_format = "%Y-%m-%d"

[hover]
# Opacity of the series under the pointer
opacity = 0.8

# Tooltip distance from the pointer in pixels
tooltip_offset = 15.0

[mini_chart]
# Plot area of the monthly bar chart shown in the tooltip
plot_width = 150.0
plot_height = 100.0
margin = { top = 10.0, right = 10.0, bottom = 20.0, left = 30.0 }

# Gap between bars as a fraction of the band
padding = 0.2

y_ticks = 5
font_size = 8.0
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
