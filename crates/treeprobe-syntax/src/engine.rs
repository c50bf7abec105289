//! Capability boundary between the renderers and a parsing library.
//!
//! A [`SyntaxEngine`] turns source bytes into a [`ParsedTree`] and pattern
//! text into a [`CompiledQuery`]. Executing a compiled query yields a lazy,
//! single-pass sequence of [`QueryMatch`] values. The Tree-sitter backed
//! implementation lives in [`crate::Parser`] and [`crate::Query`].

use crate::error::SyntaxError;
use crate::node::SyntaxNode;

/// Parses source text and compiles queries for one grammar.
pub trait SyntaxEngine {
    /// Tree produced by [`SyntaxEngine::parse`].
    type Tree: ParsedTree;
    /// Query produced by [`SyntaxEngine::compile_query`].
    type Query: CompiledQuery<Self::Tree>;

    /// Parses `source` into a tree.
    ///
    /// # Errors
    ///
    /// Returns an error when the engine cannot produce a tree at all.
    fn parse(&mut self, source: &[u8]) -> Result<Self::Tree, SyntaxError>;

    /// Compiles `pattern` for this engine's grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidQuery`] when the pattern is malformed.
    fn compile_query(&self, pattern: &str) -> Result<Self::Query, SyntaxError>;
}

/// An immutable parse tree together with the bytes it was parsed from.
pub trait ParsedTree {
    /// Node handle borrowed from the tree.
    type Node<'t>: SyntaxNode
    where
        Self: 't;

    /// Returns the root node.
    fn root(&self) -> Self::Node<'_>;

    /// Returns the parsed source buffer.
    fn source(&self) -> &[u8];
}

/// A query ready to run against trees of type `T`.
pub trait CompiledQuery<T: ParsedTree> {
    /// Lazy match sequence returned by [`CompiledQuery::execute`].
    type Matches<'q>: Iterator<Item = Result<QueryMatch<'q, T::Node<'q>>, SyntaxError>>
    where
        Self: 'q,
        T: 'q;

    /// Starts a fresh pass over `tree`.
    ///
    /// The returned sequence borrows the query, so a second pass requires
    /// calling `execute` again.
    fn execute<'q>(&'q mut self, tree: &'q T) -> Self::Matches<'q>;
}

/// A named binding from a query pattern to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'q, N> {
    /// Capture name without the leading `@`.
    pub name: &'q str,
    /// The captured node.
    pub node: N,
}

/// One occurrence of a query pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatch<'q, N> {
    /// Captures in the order the engine produced them.
    pub captures: Vec<Capture<'q, N>>,
}
