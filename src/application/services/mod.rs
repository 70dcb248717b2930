//! # Application Services
//!
//! Services that orchestrate domain rules and persistence.
//!
//! - [`EventMembershipService`](membership::EventMembershipService):
//!   join/leave/update workflows plus event listings

pub mod membership;

pub use membership::{EventDetails, EventMembershipService, EventSummary};
