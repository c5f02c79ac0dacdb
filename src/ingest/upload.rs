//! File selection and reading, modelled as a cancellable request.
//!
//! Every selection takes a new [`ReadTicket`]. Starting a newer read (or
//! cancelling) invalidates older tickets, so a slow read that completes after
//! a newer selection is discarded instead of replacing the fresher dataset.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::parse::parse;
use super::record::Dataset;
use crate::error::{Result, StreamChartError};

/// Where the CSV text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadSource {
    File(PathBuf),
    Stdin,
}

impl UploadSource {
    /// `-` selects stdin, anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg.to_path_buf())
        }
    }

    /// Human-readable name, used for page titles.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_stem()
                .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned()),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Read the full text of the source.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the read.
    ///
    /// # Errors
    /// Returns `FileRead` if the file cannot be read, or `Io` for stdin failures.
    pub fn read_text(&self) -> Result<String> {
        let bytes = match self {
            Self::File(path) => {
                if !has_csv_extension(path) {
                    warn!(path = %path.display(), "input does not have a .csv extension");
                }
                std::fs::read(path).map_err(|source| StreamChartError::FileRead {
                    path: path.clone(),
                    source,
                })?
            }
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin().read_to_end(&mut bytes)?;
                bytes
            }
        };
        Ok(decode_lossy(bytes, &self.display_name()))
    }
}

fn decode_lossy(bytes: Vec<u8>, source: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                source,
                offset = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Handle for one in-flight read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ReadTicket {
    generation: u64,
}

/// Owns the current dataset and arbitrates between overlapping reads.
#[derive(Debug, Default)]
pub struct UploadSession {
    generation: u64,
    in_flight: Option<u64>,
    dataset: Option<Dataset>,
}

impl UploadSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new read, superseding any read still in flight.
    pub fn begin(&mut self) -> ReadTicket {
        self.generation += 1;
        if let Some(stale) = self.in_flight.replace(self.generation) {
            debug!(stale, current = self.generation, "superseding in-flight read");
        }
        ReadTicket {
            generation: self.generation,
        }
    }

    /// Abandon the read in flight, if any.
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation += 1;
        }
    }

    #[must_use]
    pub fn is_current(&self, ticket: ReadTicket) -> bool {
        self.in_flight == Some(ticket.generation)
    }

    /// Deliver the text of a finished read.
    ///
    /// Returns the new dataset, or `None` when the ticket was superseded or
    /// cancelled, in which case the previous dataset is left untouched.
    pub fn complete(&mut self, ticket: ReadTicket, text: &str) -> Option<&Dataset> {
        if !self.is_current(ticket) {
            debug!(generation = ticket.generation, "discarding stale read");
            return None;
        }
        self.in_flight = None;
        self.dataset = Some(parse(text));
        self.dataset.as_ref()
    }

    /// Read `source` synchronously and install its dataset.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read; the previous dataset is kept.
    pub fn load(&mut self, source: &UploadSource) -> Result<&Dataset> {
        let ticket = self.begin();
        let text = match source.read_text() {
            Ok(text) => text,
            Err(e) => {
                self.cancel();
                return Err(e);
            }
        };
        self.complete(ticket, &text);
        self.dataset.as_ref().ok_or_else(|| {
            StreamChartError::Config("upload finished without a dataset".to_string())
        })
    }

    /// The dataset of the most recent successful read.
    #[must_use]
    pub const fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
