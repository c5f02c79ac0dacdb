//! Colored error and warning messages on stderr.
//!
//! Format: `✖ Type: message`, then optional `× detail` and `help: suggestion`
//! lines.

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};
use crate::error::StreamChartError;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(std::io::stderr().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn print_error(&self, error: &StreamChartError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            error.error_type(),
            &error.message(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None, suggestion);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let head = format!("✖ {error_type}:");
        self.write_block(w, ansi::RED, &head, message, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, ansi::YELLOW, "⚠ Warning:", message, detail, suggestion);
    }

    // Write failures are ignored: there is nowhere left to report them.
    fn write_block<W: Write>(
        &self,
        w: &mut W,
        color: &str,
        head: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{head}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{head} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

/// Print `error` to stderr with the given color mode.
pub fn report_error(error: &StreamChartError, mode: ColorMode) {
    ErrorOutput::new(mode).print_error(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
