use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{LOCAL_CONFIG_NAME, PaletteOverflow};
use crate::output::{ColorMode, OutputFormat, SummaryFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Policy for more series than palette colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverflowChoice {
    /// Reuse colors from the start of the palette
    Cycle,
    /// Render a "too many series" placeholder
    Reject,
}

impl From<OverflowChoice> for PaletteOverflow {
    fn from(choice: OverflowChoice) -> Self {
        match choice {
            OverflowChoice::Cycle => Self::Cycle,
            OverflowChoice::Reject => Self::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "streamchart")]
#[command(author, version, about = "Render CSV time series as an interactive streamgraph")]
#[command(long_about = "Reads a CSV file whose first column is a date and whose other columns \
    are integer series, and renders a wiggle-offset streamgraph with a legend and per-series \
    monthly bar charts on hover.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a CSV file as a streamgraph
    Render(RenderArgs),

    /// Summarize how a CSV file is parsed
    Inspect(InspectArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// CSV file to render ("-" reads stdin)
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: html, svg, json]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title (default: input file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Layout of the date column (overrides config), e.g. %d/%m/%Y
    #[arg(long)]
    pub date_format: Option<String>,

    /// What to do with more series than palette colors (overrides config)
    #[arg(long, value_enum)]
    pub palette_overflow: Option<OverflowChoice>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// CSV file to inspect ("-" reads stdin)
    pub input: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: SummaryFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
