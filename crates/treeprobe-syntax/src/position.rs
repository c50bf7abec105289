//! Row and column positions.
//!
//! Tree-sitter positions are zero-based. Reports show rows one-based while
//! columns stay zero-based byte offsets, matching the upstream CLI output.

use std::fmt;

/// A zero-based row and column pair within a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Point {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based byte column within the row.
    pub column: usize,
}

impl Point {
    /// Creates a point from zero-based coordinates.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the `(row, column)` pair shown to users: row one-based,
    /// column unchanged.
    #[must_use]
    pub const fn display(self) -> (usize, usize) {
        (self.row.saturating_add(1), self.column)
    }
}

impl From<tree_sitter::Point> for Point {
    fn from(point: tree_sitter::Point) -> Self {
        Self::new(point.row, point.column)
    }
}

/// Formats as `row:column` using display coordinates.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, column) = self.display();
        write!(f, "{row}:{column}")
    }
}
