//! Shell configuration

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum, builder::FalseyValueParser};

use crate::{
    catalogue::{Catalogue, FixtureError, Preset, fixture},
    planners::exhaustive::DEFAULT_MAX_PER_DENOMINATION,
};

/// Cash card advisor configuration
#[derive(Debug, Parser)]
#[command(
    name = "cashcard",
    about = "Advises how to pay a price with discounted cash cards",
    long_about = None
)]
pub struct Config {
    /// Prices in baht; read one per line from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub prices: Vec<String>,

    /// YAML catalogue file (overrides --preset)
    #[arg(short, long, env = "CASHCARD_CATALOGUE")]
    pub catalogue: Option<PathBuf>,

    /// Bundled catalogue to use when no file is given
    #[arg(short, long, env = "CASHCARD_PRESET", value_enum, default_value_t = Preset::Standard)]
    pub preset: Preset,

    /// Most cards of a single denomination Plan B may use
    #[arg(
        short,
        long,
        env = "CASHCARD_MAX_PER_DENOMINATION",
        default_value_t = DEFAULT_MAX_PER_DENOMINATION
    )]
    pub max_per_denomination: u32,

    /// Output format (table, yaml)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Disable ANSI colours in table output (any `NO_COLOR` value but a false literal)
    #[arg(long, env = "NO_COLOR", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Load the configured catalogue: the file when given, otherwise the preset.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the catalogue cannot be read or is invalid.
    pub fn catalogue(&self) -> Result<Catalogue, FixtureError> {
        match &self.catalogue {
            Some(path) => fixture::load(path),
            None => self.preset.catalogue(),
        }
    }
}

/// Advice output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Side-by-side tables for the cashier.
    Table,

    /// YAML documents for scripts.
    Yaml,
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
