//! Tree-sitter parsing wrapper.
//!
//! [`Parser`] is the Tree-sitter implementation of [`SyntaxEngine`]. Parsing
//! is error-tolerant: a [`ParseResult`] may contain ERROR and MISSING nodes,
//! which are rendered like any other node and can be listed via
//! [`ParseResult::errors`].

use std::ops::Range;

use crate::engine::{ParsedTree, SyntaxEngine};
use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::position::Point;
use crate::query::Query;

/// Result of parsing source code.
///
/// Owns both the syntax tree and the bytes it was parsed from, so the two
/// are released together.
#[derive(Debug)]
pub struct ParseResult {
    tree: tree_sitter::Tree,
    source: Vec<u8>,
    language: SupportedLanguage,
}

impl ParseResult {
    /// Returns the language of the parsed code.
    #[must_use]
    pub const fn language(&self) -> SupportedLanguage {
        self.language
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns whether the tree contains ERROR or MISSING nodes.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Collects every ERROR and MISSING node in document order.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &mut errors);
        errors
    }
}

impl ParsedTree for ParseResult {
    type Node<'t> = tree_sitter::Node<'t>;

    fn root(&self) -> Self::Node<'_> {
        self.tree.root_node()
    }

    fn source(&self) -> &[u8] {
        &self.source
    }
}

/// Location of a syntax error found in a parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error node.
    pub byte_range: Range<usize>,
    /// Where the error node starts.
    pub start: Point,
    /// Either `syntax error` or `missing <kind>`.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>) -> Self {
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        Self {
            byte_range: node.byte_range(),
            start: node.start_position().into(),
            message,
        }
    }
}

/// Tree-sitter parser configured for a single language.
pub struct Parser {
    inner: tree_sitter::Parser,
    language: SupportedLanguage,
}

impl Parser {
    /// Creates a new parser for the given language.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar is incompatible with the linked
    /// Tree-sitter runtime.
    pub fn new(language: SupportedLanguage) -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&language.tree_sitter_language())
            .map_err(|e| SyntaxError::parser_init(language, e.to_string()))?;

        Ok(Self { inner, language })
    }
}

impl SyntaxEngine for Parser {
    type Tree = ParseResult;
    type Query = Query;

    fn parse(&mut self, source: &[u8]) -> Result<ParseResult, SyntaxError> {
        let tree = self
            .inner
            .parse(source, None)
            .ok_or_else(|| SyntaxError::parse(self.language, "parsing failed"))?;

        Ok(ParseResult {
            tree,
            source: source.to_vec(),
            language: self.language,
        })
    }

    fn compile_query(&self, pattern: &str) -> Result<Query, SyntaxError> {
        Query::new(self.language, pattern)
    }
}

fn collect_error_nodes(node: tree_sitter::Node<'_>, errors: &mut Vec<SyntaxErrorInfo>) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node));
    }
    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, errors);
    }
}
