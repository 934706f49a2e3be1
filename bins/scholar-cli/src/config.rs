//! CLI configuration: defaults, then environment, then command-line flags.
//!
//! Only presentation and logging are configurable. The award formula and its
//! constants are fixed for the modeled program year.

use anyhow::{anyhow, Result};
use clap::ValueEnum;

pub const ENV_LOG_LEVEL: &str = "SCHOLAR_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SCHOLAR_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "SCHOLAR_OUTPUT";

/// Log line format written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Result format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level filter string (e.g. "info", "debug", "scholar_award=trace").
    pub log_level: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

fn parse_enum<T: ValueEnum>(var: &str, raw: &str) -> Result<T> {
    T::from_str(raw.trim(), true)
        .map_err(|_| anyhow!("{var} must be one of: text, json (got {raw:?})"))
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset keys keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            let level = level.trim();
            if !level.is_empty() {
                config.log_level = level.to_string();
            }
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = parse_enum(ENV_LOG_FORMAT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_OUTPUT) {
            config.output = parse_enum(ENV_OUTPUT, &raw)?;
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded configuration.
    pub fn with_overrides(
        self,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
        output: Option<OutputFormat>,
    ) -> Self {
        Self {
            log_level: log_level.unwrap_or(self.log_level),
            log_format: log_format.unwrap_or(self.log_format),
            output: output.unwrap_or(self.output),
        }
    }
}
