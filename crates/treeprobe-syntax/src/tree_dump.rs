//! S-expression style dump of a parse tree.
//!
//! Every node occupies its own line, indented two spaces per depth level:
//!
//! ```text
//! (source_file
//!   (package_clause
//!     "package"
//!     (package_identifier "main")
//!   )
//! )
//! ```
//!
//! Named leaves show their (escaped, possibly truncated) text in quotes.
//! Named nodes with children open on one line and close on another at the
//! same indentation. Anonymous nodes show their full escaped text and are
//! never truncated.

use std::io::Write;

use crate::error::SyntaxError;
use crate::escape::{decode, escape_control, truncate_display};
use crate::node::SyntaxNode;

const INDENT: &str = "  ";

/// Writes the tree rooted at `root` to `out`.
///
/// # Errors
///
/// Returns [`SyntaxError::InvalidNodeRange`] if a node's byte range falls
/// outside `source`, and [`SyntaxError::Io`] if writing fails. Output
/// already written for earlier nodes is not retracted.
pub fn write_tree<N, W>(out: &mut W, root: &N, source: &[u8]) -> Result<(), SyntaxError>
where
    N: SyntaxNode,
    W: Write + ?Sized,
{
    write_node(out, root, source, 0)
}

/// Renders the tree rooted at `root` into a string.
///
/// # Errors
///
/// Returns [`SyntaxError::InvalidNodeRange`] if a node's byte range falls
/// outside `source`.
pub fn tree_to_string<N: SyntaxNode>(root: &N, source: &[u8]) -> Result<String, SyntaxError> {
    let mut buffer = Vec::new();
    write_tree(&mut buffer, root, source)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_node<N, W>(out: &mut W, node: &N, source: &[u8], depth: usize) -> Result<(), SyntaxError>
where
    N: SyntaxNode,
    W: Write + ?Sized,
{
    let indent = INDENT.repeat(depth);
    let children = node.children();

    match (node.is_named(), children.is_empty()) {
        (true, true) => {
            let text = decode(node.source_bytes(source)?);
            let shown = truncate_display(&escape_control(&text)).into_owned();
            writeln!(out, "{indent}({} \"{shown}\")", node.kind())?;
            return Ok(());
        }
        (true, false) => writeln!(out, "{indent}({}", node.kind())?,
        (false, _) => {
            let text = decode(node.source_bytes(source)?);
            writeln!(out, "{indent}\"{}\"", escape_control(&text))?;
        }
    }

    for child in &children {
        write_node(out, child, source, depth + 1)?;
    }

    if node.is_named() {
        writeln!(out, "{indent})")?;
    }
    Ok(())
}
