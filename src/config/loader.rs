//! Locating and reading `.streamchart.toml`.
//!
//! An explicit `--config` path is read as-is. Otherwise the working
//! directory's `.streamchart.toml` wins over `config.toml` in the user's
//! config directory, and a chart with no file at all uses built-in defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StreamChartError};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".streamchart.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// A parsed configuration and the file it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults apply.
    pub source: Option<PathBuf>,
}

/// Produces the chart configuration.
pub trait ConfigLoader {
    /// Search the usual locations, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read or is not valid TOML.
    fn load(&self) -> Result<LoadResult>;

    /// Read exactly `path`.
    ///
    /// # Errors
    /// Returns `FileRead` if `path` cannot be read, or `TomlParse` if it is not valid TOML.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// The filesystem calls the loader needs, so tests can fake them.
pub trait FileSystem {
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the working directory is unavailable.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory for streamchart settings, e.g. `~/.config/streamchart`
    /// on Linux or `%APPDATA%\streamchart` on Windows.
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "streamchart")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Candidate files in priority order; unavailable directories are left out.
    #[must_use]
    pub fn search_paths(&self) -> Vec<PathBuf> {
        let local = self
            .fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user).collect()
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.search_paths().into_iter().find(|p| self.fs.exists(p)) {
            Some(path) => self.load_from_path(&path),
            None => {
                debug!("no .streamchart.toml or user config, using defaults");
                Ok(LoadResult {
                    config: Config::default(),
                    source: None,
                })
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let text = self
            .fs
            .read_to_string(path)
            .map_err(|source| StreamChartError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Config = toml::from_str(&text)?;
        debug!(path = %path.display(), "read chart configuration");

        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
