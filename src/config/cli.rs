use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the tocwright binary.
#[derive(Debug, Parser)]
#[command(
    name = "tocwright",
    version,
    about = "Build navigable tables of contents for Markdown posts"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "TOCWRIGHT_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the table of contents of a Markdown document.
    Outline(OutlineArgs),
    /// Print the scroll position of one heading.
    Scroll(ScrollArgs),
}

#[derive(Debug, Args, Clone)]
pub struct OutlineArgs {
    #[command(flatten)]
    pub overrides: TocOverrides,

    /// Override the output format.
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Markdown document to read.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct ScrollArgs {
    #[command(flatten)]
    pub overrides: TocOverrides,

    /// Markdown document to read.
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Anchor id of the heading to scroll to.
    #[arg(value_name = "HEADING_ID")]
    pub heading_id: String,
}

#[derive(Debug, Args, Default, Clone)]
pub struct TocOverrides {
    /// Resolve positions against the preview rendering, which prepends a title line.
    #[arg(
        long = "preview",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub preview: Option<bool>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
