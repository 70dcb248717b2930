//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`EventId`], [`EventTypeId`]: store-assigned numeric identifiers
//! - [`ParticipantId`]: opaque external identity string
//!
//! ## Time
//!
//! - [`Timestamp`](timestamp::Timestamp): UTC datetime wrapper

pub mod ids;
pub mod timestamp;

pub use ids::{EventId, EventTypeId, ParticipantId};
pub use timestamp::Timestamp;
