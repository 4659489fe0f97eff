//! Error types for Tagtree

use thiserror::Error;

/// Main error type for Tagtree operations.
///
/// Failures raised by caller-supplied configure closures never pass through
/// this type: the `try_` builder forms hand them back unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagTreeError {
    /// Outline text is not well formed
    #[error("Parse error at {line}:{column}: {message}")]
    Parse {
        /// Human-readable error message
        message: String,
        /// Line number (1-indexed)
        line: usize,
        /// Column number (1-indexed)
        column: usize,
    },

    /// Outline nests deeper than the configured limit
    #[error("Nesting too deep: outlines are limited to {limit} levels")]
    DepthLimitExceeded {
        /// The configured maximum depth
        limit: usize,
    },
}

impl TagTreeError {
    /// Build a parse error from a `syn` error, using the start of its span.
    pub fn from_syn(error: &syn::Error) -> Self {
        let start = error.span().start();
        Self::Parse {
            message: error.to_string(),
            line: start.line,
            column: start.column + 1,
        }
    }
}

/// Result type alias for Tagtree operations
pub type Result<T> = std::result::Result<T, TagTreeError>;
