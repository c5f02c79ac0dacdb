use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date format '{format}': {reason}")]
    InvalidDateFormat { format: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl StreamChartError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::InvalidDateFormat { .. } => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Csv(_) => "CSV",
            Self::Io(_) => "IO",
            Self::TomlParse(_) | Self::TomlSerialize(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::InvalidDateFormat { format, reason } => format!("'{format}': {reason}"),
            Self::Csv(e) => e.to_string(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::TomlSerialize(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Optional extra line shown beneath the message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::TomlParse(e) => e.span().map(|span| format!("at bytes {}..{}", span.start, span.end)),
            _ => None,
        }
    }

    /// Optional hint on how to fix the problem.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileRead { .. } => Some("check that the path exists and is readable"),
            Self::InvalidDateFormat { .. } => {
                Some("use a chrono strftime pattern such as \"%Y-%m-%d\"")
            }
            Self::TomlParse(_) => Some("run `streamchart config validate` for details"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
