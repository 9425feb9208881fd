//! Error handling for LeatherKit
//!
//! The geometry engine itself degrades silently on degenerate input; errors
//! only surface where a caller hands the engine something it cannot
//! interpret:
//! - Unknown string tags (hole types, edges, anchors, line roles)
//! - Parameter sets that fail validation
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for LeatherKit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A string tag did not name any known variant
    #[error("Unknown {kind}: {value}")]
    UnknownVariant {
        /// The kind of value being parsed (e.g. "hole type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A parameter is outside of its valid range
    #[error("Parameter '{name}' out of range: {value} ({reason})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// What the valid range is.
        reason: String,
    },

    /// A parameter is not a finite number
    #[error("Parameter '{name}' must be finite")]
    NotFinite {
        /// The parameter name.
        name: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl PatternError {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        PatternError::Other(msg.into())
    }

    /// Create an unknown-variant error for a parse failure
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        PatternError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        PatternError::OutOfRange {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a not-finite error
    pub fn not_finite(name: impl Into<String>) -> Self {
        PatternError::NotFinite { name: name.into() }
    }

    /// Check if this is a parse error
    pub fn is_parse_error(&self) -> bool {
        matches!(self, PatternError::UnknownVariant { .. })
    }
}

/// Result type using PatternError
pub type Result<T> = std::result::Result<T, PatternError>;
