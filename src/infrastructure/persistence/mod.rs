//! # Persistence Layer
//!
//! The persistence store boundary of the membership core.
//!
//! ## Repository Traits (Ports)
//!
//! - [`EventRepository`]: persistence for events
//! - [`ParticipationRepository`]: join rows with the pair uniqueness
//!   constraint
//! - [`EventTypeRepository`]: event type reference data
//!
//! ## Implementations
//!
//! - `in_memory`: in-memory implementations for testing and embedding

pub mod in_memory;
pub mod traits;

pub use traits::{
    EventRepository, EventTypeRepository, ParticipationRepository, RepositoryError,
    RepositoryResult,
};
