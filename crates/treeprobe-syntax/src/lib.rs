//! Tree-sitter inspection for the treeprobe command-line tool.
//!
//! This crate turns a parse tree into deterministic text. It provides:
//!
//! - **Tree dumps** via [`write_tree`]: an indented S-expression view of
//!   every node, with named/anonymous distinction and escaped, truncated
//!   leaf text
//! - **Match reports** via [`write_matches`]: every capture of every query
//!   match with its one-based row, zero-based column, and exact source text
//! - **A language registry** via [`SupportedLanguage`], mapping names and
//!   file extensions to compiled grammars
//!
//! The renderers depend only on the [`SyntaxNode`] trait. Parsing and query
//! execution sit behind [`SyntaxEngine`], implemented here by [`Parser`].
//!
//! # Example: Dumping a Tree
//!
//! ```
//! use treeprobe_syntax::{ParsedTree, Parser, SupportedLanguage, SyntaxEngine, tree_to_string};
//!
//! let mut parser = Parser::new(SupportedLanguage::Go)?;
//! let tree = parser.parse(b"package main")?;
//! let dump = tree_to_string(&tree.root(), tree.source())?;
//! assert!(dump.contains("(package_identifier \"main\")"));
//! # Ok::<(), treeprobe_syntax::SyntaxError>(())
//! ```
//!
//! # Example: Reporting Query Matches
//!
//! ```
//! use treeprobe_syntax::{
//!     CompiledQuery, ParsedTree, Parser, SupportedLanguage, SyntaxEngine, matches_to_string,
//! };
//!
//! let mut parser = Parser::new(SupportedLanguage::Go)?;
//! let tree = parser.parse(b"package main")?;
//! let mut query = parser.compile_query("(package_clause (package_identifier) @package)")?;
//! let report = matches_to_string(tree.source(), query.execute(&tree))?;
//! assert!(report.starts_with("@package\nstart: 1:8\nend: 1:12\n"));
//! # Ok::<(), treeprobe_syntax::SyntaxError>(())
//! ```

mod engine;
mod error;
mod escape;
mod language;
mod match_report;
mod node;
mod parser;
mod position;
mod query;
mod tree_dump;

pub use engine::{Capture, CompiledQuery, ParsedTree, QueryMatch, SyntaxEngine};
pub use error::SyntaxError;
pub use escape::{MAX_LEAF_CHARS, TRUNCATED_LEAF_CHARS, escape_control, truncate_display};
pub use language::{LanguageParseError, SupportedLanguage};
pub use match_report::{NO_MATCHES, matches_to_string, write_matches};
pub use node::SyntaxNode;
pub use parser::{ParseResult, Parser, SyntaxErrorInfo};
pub use position::Point;
pub use query::{Query, QueryMatches};
pub use tree_dump::{tree_to_string, write_tree};

#[cfg(test)]
mod tests;
