//! Tree-sitter query compilation and execution.

use tree_sitter::StreamingIterator;

use crate::engine::{Capture, CompiledQuery, ParsedTree, QueryMatch};
use crate::error::SyntaxError;
use crate::language::SupportedLanguage;
use crate::parser::ParseResult;

/// A compiled Tree-sitter query and the cursor that executes it.
///
/// Dropping the query releases the cursor as well.
pub struct Query {
    inner: tree_sitter::Query,
    cursor: tree_sitter::QueryCursor,
}

impl Query {
    /// Compiles `pattern` against the grammar of `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidQuery`] describing the first syntax,
    /// node-type, field, or capture problem Tree-sitter finds.
    pub fn new(language: SupportedLanguage, pattern: &str) -> Result<Self, SyntaxError> {
        let inner = tree_sitter::Query::new(&language.tree_sitter_language(), pattern)
            .map_err(|e| SyntaxError::invalid_query(language, e.to_string()))?;

        Ok(Self {
            inner,
            cursor: tree_sitter::QueryCursor::new(),
        })
    }

    /// Returns the capture names declared by the query, in index order.
    #[must_use]
    pub fn capture_names(&self) -> &[&str] {
        self.inner.capture_names()
    }

    /// Returns the number of patterns in the query.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.inner.pattern_count()
    }
}

impl CompiledQuery<ParseResult> for Query {
    type Matches<'q> = QueryMatches<'q>;

    fn execute<'q>(&'q mut self, tree: &'q ParseResult) -> QueryMatches<'q> {
        let capture_names = self.inner.capture_names();
        let inner = self
            .cursor
            .matches(&self.inner, tree.root_node(), tree.source());
        QueryMatches {
            inner,
            capture_names,
        }
    }
}

/// Lazy sequence of matches from one execution of a [`Query`].
pub struct QueryMatches<'q> {
    inner: tree_sitter::QueryMatches<'q, 'q, &'q [u8], &'q [u8]>,
    capture_names: &'q [&'q str],
}

impl<'q> Iterator for QueryMatches<'q> {
    type Item = Result<QueryMatch<'q, tree_sitter::Node<'q>>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.inner.next()?;
        let captures = found
            .captures
            .iter()
            .map(|capture| {
                usize::try_from(capture.index)
                    .ok()
                    .and_then(|index| self.capture_names.get(index).copied())
                    .map(|name| Capture {
                        name,
                        node: capture.node,
                    })
                    .ok_or_else(|| {
                        SyntaxError::internal_error(format!(
                            "capture index {} has no name",
                            capture.index
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>();

        Some(captures.map(|captures| QueryMatch { captures }))
    }
}
