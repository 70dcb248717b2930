//! # Application Errors
//!
//! Error types for the application layer.
//!
//! The membership service follows a fail-soft contract: expected business
//! outcomes (event absent, duplicate join, nothing to leave) are reported
//! as a `false` result, never as an error. An `Err` therefore means one of
//! two things:
//!
//! - [`ApplicationError::Validation`] — malformed caller input, a caller
//!   bug rather than a business outcome
//! - [`ApplicationError::Repository`] — the persistence store itself failed
//!
//! # Examples
//!
//! ```
//! use event_membership::application::error::ApplicationError;
//! use event_membership::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::EndNotAfterStart.into();
//! assert!(err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps domain validation failures and persistence store failures with
/// application-specific context.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// Persistence store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a persistence store failure.
    #[must_use]
    pub const fn is_repository(&self) -> bool {
        matches!(self, Self::Repository(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
