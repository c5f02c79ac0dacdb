use tracing::{debug, info};

use crate::chart::StreamChart;
use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, validate_date_format};
use crate::ingest::{Dataset, UploadSession, UploadSource};
use crate::layout::RenderOutcome;
use crate::output::{ColorMode, ErrorOutput, OutputFormat, report_error};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli.color.into());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads the input, renders it and writes the document.
///
/// An input with nothing to draw still produces a document holding the
/// placeholder message.
///
/// # Errors
/// Returns an error if configuration loading fails, the input cannot be read
/// or the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;
    apply_overrides(&mut config, args)?;

    let source = UploadSource::from_arg(&args.input);
    let mut session = UploadSession::new();
    let dataset = session.load(&source)?;

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| source.display_name());
    let chart = render_chart(dataset, config);
    if !cli.quiet {
        report_skipped_rows(&chart, cli.color.into());
    }
    let document = args.format.formatter(&title).format(&chart)?;

    write_output(args.output.as_deref(), &document)?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "chart written");
    }
    Ok(())
}

/// Command-line flags win over the configuration file.
///
/// # Errors
/// Returns `InvalidDateFormat` if `--date-format` is not a usable layout.
pub fn apply_overrides(config: &mut Config, args: &RenderArgs) -> Result<()> {
    if let Some(format) = &args.date_format {
        validate_date_format(format)?;
        config.data.date_format.clone_from(format);
    }
    if let Some(overflow) = args.palette_overflow {
        config.palette.overflow = overflow.into();
    }
    Ok(())
}

/// Lay out `dataset` in a fresh chart.
#[must_use]
pub fn render_chart(dataset: &Dataset, config: Config) -> StreamChart {
    let mut chart = StreamChart::new(config);
    match chart.render(dataset) {
        RenderOutcome::Chart(layout) => {
            debug!(series = layout.keys.len(), rows = layout.rows.len(), "rendering chart");
        }
        RenderOutcome::Empty { reason, .. } => info!(%reason, "rendering placeholder"),
    }
    chart
}

/// Render `dataset` into a complete document of the given format.
///
/// # Errors
/// Returns an error if the formatter fails to serialize.
pub fn render_document(
    dataset: &Dataset,
    config: Config,
    format: OutputFormat,
    title: &str,
) -> Result<String> {
    format.formatter(title).format(&render_chart(dataset, config))
}

fn report_skipped_rows(chart: &StreamChart, mode: ColorMode) {
    let Some(layout) = chart.outcome().and_then(RenderOutcome::layout) else {
        return;
    };
    if layout.skipped_rows > 0 {
        let format = &chart.config().data.date_format;
        ErrorOutput::new(mode).print_warning(
            &format!(
                "{} row(s) skipped: date did not match \"{format}\"",
                layout.skipped_rows
            ),
            Some("pass --date-format to match the first column"),
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
