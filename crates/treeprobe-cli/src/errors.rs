//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use treeprobe_syntax::SyntaxError;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("--lang is required")]
    MissingLanguage,
    #[error("unsupported language '{name}'\nSupported languages: {supported}")]
    UnsupportedLanguage { name: String, supported: String },
    #[error("failed to read file {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to read stdin: {0}")]
    ReadStdin(io::Error),
    #[error("failed to parse code: {0}")]
    Parse(SyntaxError),
    #[error("failed to execute query: {0}")]
    Query(SyntaxError),
    #[error("failed to render tree: {0}")]
    Render(SyntaxError),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

impl AppError {
    /// Usage errors arrive pre-formatted by clap; everything else gets the
    /// `Error:` prefix.
    pub(crate) fn write_to<E: io::Write>(&self, stderr: &mut E) -> io::Result<()> {
        match self {
            Self::CliUsage(error) => write!(stderr, "{error}"),
            other => writeln!(stderr, "Error: {other}"),
        }
    }
}
