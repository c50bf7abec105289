//! CLI entrypoint for the treeprobe syntax inspector.
//!
//! The binary delegates to [`treeprobe_cli::run`], which parses arguments,
//! reads the input, and writes either a tree dump or a match report.

use std::io::{self, BufWriter, StderrLock, StdinLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'static> = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut stderr: StderrLock<'static> = io::stderr().lock();
    treeprobe_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
