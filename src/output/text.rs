use std::fmt::Write;
use std::io::IsTerminal;

use crate::error::Result;
use crate::ingest::DatasetSummary;

use super::svg::format_number;
use super::{ColorMode, SummaryFormatter, ansi};

/// Human-readable dataset report for the terminal.
pub struct SummaryTextFormatter {
    use_colors: bool,
}

impl SummaryTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(std::io::stdout().is_terminal()),
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl SummaryFormatter for SummaryTextFormatter {
    fn format(&self, summary: &DatasetSummary) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(output, "{}", self.colorize(&summary.source, ansi::BOLD));
        let _ = writeln!(output, "  Fields: {}", summary.fields.join(", "));
        let _ = writeln!(
            output,
            "  Date column: {}",
            summary.date_field.as_deref().unwrap_or("-")
        );
        let _ = writeln!(output, "  Rows: {}", summary.rows);
        if let (Some(first), Some(last)) = (&summary.first_date, &summary.last_date) {
            let _ = writeln!(output, "  Dates: {first} .. {last}");
        }

        let coerced = format!("  Coerced cells: {}", summary.coerced_cells);
        if summary.coerced_cells > 0 {
            let _ = writeln!(output, "{}", self.colorize(&coerced, ansi::YELLOW));
        } else {
            let _ = writeln!(output, "{coerced}");
        }

        if summary.series.is_empty() {
            let _ = writeln!(output, "\nNo series to plot.");
            return Ok(output);
        }

        let width = summary
            .series
            .iter()
            .map(|s| s.key.chars().count())
            .max()
            .unwrap_or(0)
            .max("Series".len());

        let _ = writeln!(
            output,
            "\n  {:<width$}  {:>12}  {:>12}  {:>14}",
            "Series", "Min", "Max", "Total"
        );
        for series in &summary.series {
            let _ = writeln!(
                output,
                "  {:<width$}  {:>12}  {:>12}  {:>14}",
                self.colorize(&series.key, ansi::GREEN),
                format_number(series.min),
                format_number(series.max),
                format_number(series.total)
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
