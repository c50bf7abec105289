//! In-process tests for the CLI runtime.
//!
//! The harness feeds [`crate::run`] in-memory stdin and captures both
//! output streams so no subprocess is needed.

use std::ffi::OsString;
use std::io::Cursor;
use std::process::ExitCode;


/// Captured result of one CLI run.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub(crate) exit: ExitCode,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// Runs the CLI with `args` (program name excluded) and `stdin`.
pub(crate) fn run_cli(args: &[&str], stdin: &str) -> Outcome {
    let argv: Vec<OsString> = std::iter::once("treeprobe")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect();
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    let exit = crate::run(argv, &mut input, &mut stdout, &mut stderr);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}
