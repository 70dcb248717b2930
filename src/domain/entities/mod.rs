//! # Domain Entities
//!
//! Core entities of the membership domain.
//!
//! - [`Event`](event::Event): an organised event with an immutable organiser
//! - [`EventType`](event_type::EventType): read-only reference data
//! - [`Participation`](participation::Participation): join-relationship
//!   between a participant and an event

pub mod event;
pub mod event_type;
pub mod participation;

pub use event::{Event, NewEvent};
pub use event_type::EventType;
pub use participation::Participation;
