//! CLI argument definitions for treeprobe.

use std::path::PathBuf;

use clap::Parser;

use crate::config::LogFormat;

/// Command-line interface for the treeprobe syntax inspector.
///
/// Without `--query` the parse tree of the input is dumped. With `--query`
/// every capture of every match is reported instead.
#[derive(Parser, Debug)]
#[command(name = "treeprobe", version, about)]
pub(crate) struct Cli {
    /// Language to parse. Inferred from the file extension when omitted.
    #[arg(long, value_name = "LANG")]
    pub(crate) lang: Option<String>,
    /// Tree-sitter query to execute.
    #[arg(long, value_name = "QUERY")]
    pub(crate) query: Option<String>,
    /// Prints the accepted language names and exits.
    #[arg(long)]
    pub(crate) list_languages: bool,
    /// Tracing filter directive for diagnostics on stderr.
    #[arg(
        long,
        value_name = "FILTER",
        env = "TREEPROBE_LOG_FILTER",
        default_value = "warn"
    )]
    pub(crate) log_filter: String,
    /// Diagnostic log format.
    #[arg(
        long,
        value_name = "FORMAT",
        env = "TREEPROBE_LOG_FORMAT",
        default_value_t = LogFormat::Compact
    )]
    pub(crate) log_format: LogFormat,
    /// File to read. Standard input is read when omitted.
    #[arg(value_name = "FILE")]
    pub(crate) file: Option<PathBuf>,
}
