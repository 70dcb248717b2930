//! # Domain Errors
//!
//! Validation failures for event data.
//!
//! A [`DomainError`] indicates malformed caller input rather than an
//! expected business outcome. Services surface these as a distinct error
//! signal instead of folding them into a `false` result.

use crate::domain::value_objects::EventTypeId;
use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Event name is outside the allowed length range.
    #[error("event name must be {min}..={max} characters, got {len}")]
    NameLength {
        /// Actual length in characters.
        len: usize,
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Event description is outside the allowed length range.
    #[error("event description must be {min}..={max} characters, got {len}")]
    DescriptionLength {
        /// Actual length in characters.
        len: usize,
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Event end time is not after its start time.
    #[error("event end time must be after its start time")]
    EndNotAfterStart,

    /// Referenced event type does not exist.
    #[error("unknown event type: {0}")]
    UnknownEventType(EventTypeId),
}

impl DomainError {
    /// Creates a name length error.
    #[must_use]
    pub const fn name_length(len: usize, min: usize, max: usize) -> Self {
        Self::NameLength { len, min, max }
    }

    /// Creates a description length error.
    #[must_use]
    pub const fn description_length(len: usize, min: usize, max: usize) -> Self {
        Self::DescriptionLength { len, min, max }
    }

    /// Returns true if this error concerns a field length.
    #[must_use]
    pub const fn is_length_violation(&self) -> bool {
        matches!(self, Self::NameLength { .. } | Self::DescriptionLength { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_error() {
        let err = DomainError::name_length(2, 5, 20);
        assert!(err.is_length_violation());
        assert!(err.to_string().contains("5..=20"));
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn description_length_error() {
        let err = DomainError::description_length(200, 15, 150);
        assert!(err.is_length_violation());
        assert!(err.to_string().contains("15..=150"));
    }

    #[test]
    fn end_not_after_start_error() {
        let err = DomainError::EndNotAfterStart;
        assert!(!err.is_length_violation());
        assert!(err.to_string().contains("after its start"));
    }

    #[test]
    fn unknown_event_type_error() {
        let err = DomainError::UnknownEventType(EventTypeId::new(9));
        assert!(err.to_string().contains("unknown event type: 9"));
    }
}
