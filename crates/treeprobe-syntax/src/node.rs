//! Read-only view of parse tree nodes.
//!
//! The renderers only need a handful of accessors, so they are written
//! against [`SyntaxNode`] rather than a concrete parser library.

use std::ops::Range;

use crate::error::SyntaxError;
use crate::position::Point;

/// Accessors a renderer needs from a parse tree node.
pub trait SyntaxNode: Sized {
    /// Grammar rule or literal token name.
    fn kind(&self) -> &str;

    /// Whether the node is a named rule rather than anonymous punctuation.
    fn is_named(&self) -> bool;

    /// Direct children in stored order.
    fn children(&self) -> Vec<Self>;

    /// Half-open byte range into the source buffer.
    fn byte_range(&self) -> Range<usize>;

    /// Position of the first byte.
    fn start_point(&self) -> Point;

    /// Position just past the last byte.
    fn end_point(&self) -> Point;

    /// Returns the bytes this node spans.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::InvalidNodeRange`] when the range does not lie
    /// within `source`.
    fn source_bytes<'s>(&self, source: &'s [u8]) -> Result<&'s [u8], SyntaxError> {
        let range = self.byte_range();
        source
            .get(range.clone())
            .ok_or_else(|| SyntaxError::invalid_node_range(self.kind(), range, source.len()))
    }
}

impl SyntaxNode for tree_sitter::Node<'_> {
    fn kind(&self) -> &str {
        tree_sitter::Node::kind(self)
    }

    fn is_named(&self) -> bool {
        tree_sitter::Node::is_named(self)
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        tree_sitter::Node::children(self, &mut cursor).collect()
    }

    fn byte_range(&self) -> Range<usize> {
        tree_sitter::Node::byte_range(self)
    }

    fn start_point(&self) -> Point {
        self.start_position().into()
    }

    fn end_point(&self) -> Point {
        self.end_position().into()
    }
}
