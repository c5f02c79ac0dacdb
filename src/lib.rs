pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod layout;
pub mod logging;
pub mod output;

pub use error::{Result, StreamChartError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
