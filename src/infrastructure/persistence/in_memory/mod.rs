//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryEventRepository`]: event persistence with id allocation
//! - [`InMemoryParticipationRepository`]: join rows with the pair
//!   uniqueness constraint
//! - [`InMemoryEventTypeRepository`]: reference data
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod event_repository;
pub mod event_type_repository;
pub mod participation_repository;

pub use event_repository::InMemoryEventRepository;
pub use event_type_repository::InMemoryEventTypeRepository;
pub use participation_repository::InMemoryParticipationRepository;
