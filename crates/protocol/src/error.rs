//! Error types for the boxen-protocol crate.
//!
//! This module defines the validation errors that can occur while turning
//! user-facing box options into a resolved [`BoxRequest`](crate::BoxRequest).

use thiserror::Error;

/// Errors that can occur while validating or resolving box options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxenError {
    /// A field received a value of the wrong fundamental kind.
    #[error("{field} must be {expected}")]
    InvalidType {
        /// The offending field (e.g. `"color"`, `"padding"`).
        field: String,
        /// A description of the accepted kind.
        expected: &'static str,
    },

    /// A tuple size spec had a length other than 2 or 4.
    #[error("{role} tuples must have a total of 2 or 4 elements, got {len}")]
    InvalidSize {
        /// Either `"padding"` or `"margin"`.
        role: &'static str,
        /// The length that was supplied.
        len: usize,
    },

    /// The box style is not one of the known keys.
    #[error("style must be one of [{valid}], got {style:?}")]
    InvalidStyle {
        /// The rejected style name.
        style: String,
        /// Comma-separated list of valid style keys.
        valid: String,
    },

    /// An alignment field is not one of `left`, `center` or `right`.
    #[error("{field} must be one of [{valid}], got {value:?}")]
    InvalidAlignment {
        /// Human-readable field name (e.g. `"text alignment"`).
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Comma-separated list of valid alignments.
        valid: String,
    },

    /// An option map contained a key that is not a box option.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

impl BoxenError {
    pub(crate) fn invalid_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
        }
    }
}

/// A specialized Result type for box validation.
pub type Result<T> = std::result::Result<T, BoxenError>;
