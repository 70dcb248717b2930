//! # Domain Layer
//!
//! Entities, value objects, and domain rules for event membership.
//!
//! The domain layer has no dependency on persistence or application
//! concerns; validation here covers structural rules only (field lengths,
//! time ordering). Rules needing store lookups live in the application
//! layer.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
