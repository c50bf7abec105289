//! Command-line runtime for the treeprobe syntax inspector.
//!
//! The module owns argument parsing, diagnostic logging, input acquisition,
//! and exit codes. Rendering lives in `treeprobe-syntax`; this crate only
//! decides what to render and where. The runtime is exercised both from the
//! binary entrypoint and from tests where the IO streams are substituted.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use clap::error::ErrorKind;
use tracing::{debug, warn};
use treeprobe_syntax::{
    CompiledQuery, ParseResult, ParsedTree, Parser, SupportedLanguage, SyntaxEngine, SyntaxError,
    write_matches, write_tree,
};

mod cli;
mod config;
mod errors;
mod input;
mod telemetry;

use cli::Cli;
use config::Config;
use errors::AppError;

/// Runs the CLI using the provided arguments and IO handles.
///
/// `stdout` receives only the tree dump, match report, or language list and
/// is flushed before returning. Errors are written to `stderr`.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read + ?Sized,
    W: Write,
    E: Write,
{
    CliRunner {
        stdin,
        stdout,
        stderr,
    }
    .run(args)
}

struct CliRunner<'a, R: ?Sized, W, E> {
    stdin: &'a mut R,
    stdout: &'a mut W,
    stderr: &'a mut E,
}

impl<R, W, E> CliRunner<'_, R, W, E>
where
    R: Read + ?Sized,
    W: Write,
    E: Write,
{
    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let result = match Cli::try_parse_from(args) {
            Ok(cli) => self.execute(&cli),
            Err(error) if is_informational(&error) => self.print_informational(&error),
            Err(error) => Err(AppError::CliUsage(error)),
        };

        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                let _ = error.write_to(self.stderr);
                ExitCode::FAILURE
            }
        }
    }

    fn execute(&mut self, cli: &Cli) -> Result<(), AppError> {
        telemetry::initialise(&Config::from(cli))?;

        if cli.list_languages {
            for name in SupportedLanguage::names() {
                writeln!(self.stdout, "{name}").map_err(AppError::WriteOutput)?;
            }
            return self.stdout.flush().map_err(AppError::WriteOutput);
        }

        let language = resolve_language(cli.lang.as_deref(), cli.file.as_deref())?;
        debug!(%language, file = ?cli.file, "resolved language");

        let source = input::read_source(cli.file.as_deref(), self.stdin)?;
        debug!(bytes = source.len(), "read input");

        let mut parser = Parser::new(language).map_err(AppError::Parse)?;
        let tree = parser.parse(&source).map_err(AppError::Parse)?;
        log_syntax_errors(&tree);

        match cli.query.as_deref().filter(|pattern| !pattern.is_empty()) {
            Some(pattern) => {
                let mut query = parser.compile_query(pattern).map_err(AppError::Query)?;
                debug!(
                    patterns = query.pattern_count(),
                    captures = ?query.capture_names(),
                    "compiled query"
                );
                let count = write_matches(self.stdout, tree.source(), query.execute(&tree))
                    .map_err(|error| output_error(error, AppError::Query))?;
                debug!(count, "reported matches");
            }
            None => write_tree(self.stdout, &tree.root(), tree.source())
                .map_err(|error| output_error(error, AppError::Render))?,
        }

        self.stdout.flush().map_err(AppError::WriteOutput)
    }

    fn print_informational(&mut self, error: &clap::Error) -> Result<(), AppError> {
        write!(self.stdout, "{}", error.render()).map_err(AppError::WriteOutput)?;
        self.stdout.flush().map_err(AppError::WriteOutput)
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Picks the language from `--lang`, falling back to the file extension.
fn resolve_language(lang: Option<&str>, file: Option<&Path>) -> Result<SupportedLanguage, AppError> {
    match lang.filter(|name| !name.is_empty()) {
        Some(name) => name
            .parse()
            .map_err(|_| AppError::UnsupportedLanguage {
                name: name.to_owned(),
                supported: SupportedLanguage::names().join(", "),
            }),
        None => file
            .and_then(SupportedLanguage::from_path)
            .ok_or(AppError::MissingLanguage),
    }
}

fn log_syntax_errors(tree: &ParseResult) {
    if !tree.has_errors() {
        return;
    }

    let errors = tree.errors();
    warn!(count = errors.len(), "input contains syntax errors");
    for error in &errors {
        let (row, column) = error.start.display();
        debug!(
            row,
            column,
            bytes = ?error.byte_range,
            message = %error.message,
            "syntax error"
        );
    }
}

/// Separates writer failures from rendering failures.
fn output_error(error: SyntaxError, wrap: fn(SyntaxError) -> AppError) -> AppError {
    match error {
        SyntaxError::Io(source) => AppError::WriteOutput(source),
        other => wrap(other),
    }
}

#[cfg(test)]
mod tests;
