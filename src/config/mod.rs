//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::str::FromStr;

use clap::{Parser, ValueEnum};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::domain::scroll::ScrollMode;

pub use cli::{CliArgs, Command, OutlineArgs, OutputFormat, ScrollArgs, TocOverrides};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "tocwright";
const ENV_PREFIX: &str = "TOCWRIGHT";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub toc: TocSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct TocSettings {
    pub scroll_mode: ScrollMode,
    pub format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match &cli.command {
        Command::Outline(args) => {
            raw.apply_toc_overrides(&args.overrides);
            if let Some(format) = args.format {
                raw.toc.format = format.to_possible_value().map(|v| v.get_name().to_string());
            }
        }
        Command::Scroll(args) => raw.apply_toc_overrides(&args.overrides),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the process arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    toc: RawTocSettings,
}

impl RawSettings {
    fn apply_toc_overrides(&mut self, overrides: &TocOverrides) {
        if let Some(preview) = overrides.preview {
            self.toc.preview = Some(preview);
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { logging, toc } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            toc: build_toc_settings(toc)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_toc_settings(toc: RawTocSettings) -> Result<TocSettings, LoadError> {
    let scroll_mode = ScrollMode::from_preview_flag(toc.preview.unwrap_or(false));

    let format = match toc.format {
        Some(value) => <OutputFormat as ValueEnum>::from_str(value.trim(), true).map_err(|_| {
            LoadError::invalid("toc.format", format!("expected `text` or `json`, got `{value}`"))
        })?,
        None => OutputFormat::default(),
    };

    Ok(TocSettings {
        scroll_mode,
        format,
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTocSettings {
    preview: Option<bool>,
    format: Option<String>,
}
