//! Domain error kinds
//!
//! "Not found" is not an error here: lookups return `Option`. Repeating a
//! state change is not an error either, see [`crate::service::StatusChange`].

use thiserror::Error;

/// Message used when a due date lies before today
pub const PAST_DUE_DATE: &str = "The due date must be today or a future date.";

/// Message used when an update carries no field to change
pub const NOTHING_TO_UPDATE: &str = "No valid fields provided for update";

/// Errors raised by validation and the orchestration layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// A business rule was violated
    #[error("{0}")]
    InvalidArgument(String),

    /// A date string could not be parsed
    #[error("Invalid date format for field '{field}': {value}. The correct format is 'yyyy-MM-dd'")]
    MalformedDate {
        /// Offending field
        field: &'static str,
        /// Raw value received
        value: String,
    },

    /// A value is not one of the accepted constants
    #[error("Invalid value for field '{field}'. The accepted values are: {accepted}")]
    MalformedEnum {
        /// Offending field
        field: &'static str,
        /// Raw value received
        value: String,
        /// Accepted values, comma separated
        accepted: String,
    },

    /// A value is not a whole number
    #[error("Invalid value for field '{field}': '{value}' is not a whole number")]
    MalformedNumber {
        /// Offending field
        field: &'static str,
        /// Raw value received
        value: String,
    },

    /// Something that should not happen did; the detail is not shown to clients
    #[error("internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the input could not be parsed at all (as opposed to breaking a rule)
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedDate { .. } | Self::MalformedEnum { .. } | Self::MalformedNumber { .. }
        )
    }
}
