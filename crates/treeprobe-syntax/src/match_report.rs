//! Plain-text report of query matches.
//!
//! Each capture is written as a block:
//!
//! ```text
//! @package
//! start: 1:8
//! end: 1:12
//! content:
//! main
//!
//! ```
//!
//! Captures appear in the order the engine produced them. Consecutive
//! matches are separated by one extra blank line. A run without any match
//! prints `No matches found`.

use std::io::Write;

use crate::engine::{Capture, QueryMatch};
use crate::error::SyntaxError;
use crate::escape::decode;
use crate::node::SyntaxNode;

/// Line printed when a query produces no matches.
pub const NO_MATCHES: &str = "No matches found";

/// Writes every match yielded by `matches` to `out`, returning how many
/// matches were written.
///
/// Matches are pulled one at a time; the first error, whether yielded by
/// the sequence or raised while writing, stops the report.
///
/// # Errors
///
/// Propagates errors from the match sequence, returns
/// [`SyntaxError::InvalidNodeRange`] for captures outside `source`, and
/// [`SyntaxError::Io`] if writing fails.
pub fn write_matches<'q, N, I, W>(
    out: &mut W,
    source: &[u8],
    matches: I,
) -> Result<usize, SyntaxError>
where
    N: SyntaxNode + 'q,
    I: IntoIterator<Item = Result<QueryMatch<'q, N>, SyntaxError>>,
    W: Write + ?Sized,
{
    let mut count = 0usize;
    for entry in matches {
        let found = entry?;
        count += 1;
        if count > 1 {
            writeln!(out)?;
        }
        for capture in &found.captures {
            write_capture(out, capture, source)?;
        }
    }

    if count == 0 {
        writeln!(out, "{NO_MATCHES}")?;
    }
    Ok(count)
}

/// Renders a match report into a string.
///
/// # Errors
///
/// See [`write_matches`].
pub fn matches_to_string<'q, N, I>(source: &[u8], matches: I) -> Result<String, SyntaxError>
where
    N: SyntaxNode + 'q,
    I: IntoIterator<Item = Result<QueryMatch<'q, N>, SyntaxError>>,
{
    let mut buffer = Vec::new();
    write_matches(&mut buffer, source, matches)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_capture<N, W>(out: &mut W, capture: &Capture<'_, N>, source: &[u8]) -> Result<(), SyntaxError>
where
    N: SyntaxNode,
    W: Write + ?Sized,
{
    let node = &capture.node;
    writeln!(out, "@{}", capture.name)?;
    writeln!(out, "start: {}", node.start_point())?;
    writeln!(out, "end: {}", node.end_point())?;
    writeln!(out, "content:")?;

    let text = decode(node.source_bytes(source)?);
    for line in text.lines() {
        writeln!(out, "{}", line.strip_suffix('\r').unwrap_or(line))?;
    }
    writeln!(out)?;
    Ok(())
}
