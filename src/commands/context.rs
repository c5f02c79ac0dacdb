//! Plumbing shared by the subcommands: configuration and output files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::error::Result;

/// Load and validate the effective configuration.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or holds invalid values.
pub fn load_config(explicit: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), explicit, no_config)
}

/// [`load_config`] with an injected loader.
///
/// # Errors
/// Same as [`load_config`].
pub fn load_config_with<L: ConfigLoader>(
    loader: &L,
    explicit: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    let result = if no_config {
        debug!("configuration loading disabled");
        LoadResult {
            config: Config::default(),
            source: None,
        }
    } else if let Some(path) = explicit {
        loader.load_from_path(path)?
    } else {
        loader.load()?
    };

    validate_config_semantics(&result.config)?;
    Ok(result)
}

/// Write `content` to `path`, or to stdout when there is none.
///
/// # Errors
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
            debug!(path = %path.display(), bytes = content.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
