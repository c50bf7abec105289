//! Runtime configuration resolved from flags and environment variables.

use strum::{Display, EnumString};

use crate::cli::Cli;

/// Supported logging output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

/// Diagnostic settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    log_filter: String,
    log_format: LogFormat,
}

impl Config {
    /// Returns the tracing filter directive.
    pub(crate) fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the selected log format.
    pub(crate) const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: String::from("warn"),
            log_format: LogFormat::default(),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            log_filter: cli.log_filter.clone(),
            log_format: cli.log_format,
        }
    }
}
