//! Error types for parsing, querying, and rendering.

use std::io;
use std::ops::Range;

use thiserror::Error;

use crate::language::SupportedLanguage;

/// Errors from syntax inspection operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser for a language.
    #[error("failed to initialise parser for {language}: {message}")]
    ParserInitError {
        /// The language that failed to initialise.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// Failed to parse source code.
    #[error("failed to parse {language}: {message}")]
    ParseError {
        /// The language that failed to parse.
        language: SupportedLanguage,
        /// Description of the failure.
        message: String,
    },

    /// The query text could not be compiled against the grammar.
    #[error("invalid query: {message}")]
    InvalidQuery {
        /// The language the query was compiled for.
        language: SupportedLanguage,
        /// Description of the compilation failure.
        message: String,
    },

    /// A node reported a byte range that does not fit the source buffer.
    #[error("node '{kind}' spans bytes {}..{} outside a {source_len}-byte source", range.start, range.end)]
    InvalidNodeRange {
        /// Kind of the offending node.
        kind: String,
        /// The byte range the node reported.
        range: Range<usize>,
        /// Length of the source buffer.
        source_len: usize,
    },

    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// Internal error indicating a bug or system failure.
    #[error("internal error: {message}")]
    InternalError {
        /// Description of the internal error.
        message: String,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParserInitError {
            language,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::ParseError {
            language,
            message: message.into(),
        }
    }

    /// Creates a query compilation error.
    #[must_use]
    pub fn invalid_query(language: SupportedLanguage, message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            language,
            message: message.into(),
        }
    }

    /// Creates an out-of-range node error.
    #[must_use]
    pub fn invalid_node_range(kind: impl Into<String>, range: Range<usize>, source_len: usize) -> Self {
        Self::InvalidNodeRange {
            kind: kind.into(),
            range,
            source_len,
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}
