//! # Repository Traits
//!
//! Port definitions for the persistence store.
//!
//! This module defines the repository traits (ports) consumed by the
//! membership service. Implementations can use different backends; the
//! crate ships in-memory implementations under
//! [`in_memory`](super::in_memory).
//!
//! # Available Repositories
//!
//! - [`EventRepository`]: persistence for events
//! - [`ParticipationRepository`]: persistence for join rows, enforcing the
//!   `(event, participant)` uniqueness constraint
//! - [`EventTypeRepository`]: read-mostly reference data
//!
//! # Examples
//!
//! ```ignore
//! use event_membership::infrastructure::persistence::traits::EventRepository;
//!
//! async fn count_events(repo: &impl EventRepository) {
//!     let total = repo.count().await.unwrap();
//!     println!("{total} events");
//! }
//! ```

use crate::domain::entities::event::{Event, NewEvent};
use crate::domain::entities::event_type::EventType;
use crate::domain::entities::participation::Participation;
use crate::domain::value_objects::{EventId, EventTypeId, ParticipantId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity (uniqueness constraint violation).
    #[error("duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("query error: {0}")]
    Query(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for event entities.
///
/// Identifier assignment happens inside [`insert`](EventRepository::insert);
/// callers never pick event ids.
#[async_trait]
pub trait EventRepository: Send + Sync + fmt::Debug {
    /// Inserts a new event, assigning its identifier.
    ///
    /// Returns the materialized [`Event`] including the assigned id.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the record cannot be stored.
    async fn insert(&self, new_event: NewEvent) -> RepositoryResult<Event>;

    /// Gets an event by id.
    ///
    /// Returns `None` if the event does not exist.
    async fn get(&self, id: &EventId) -> RepositoryResult<Option<Event>>;

    /// Replaces an existing event's record.
    ///
    /// Returns `Ok(true)` if the event was updated, `Ok(false)` if no event
    /// with that id exists. Never inserts.
    async fn update(&self, event: &Event) -> RepositoryResult<bool>;

    /// Gets all events.
    async fn get_all(&self) -> RepositoryResult<Vec<Event>>;

    /// Counts all events.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for participation rows.
///
/// This is the uniqueness constraint surface of the store: two concurrent
/// inserts for the same `(event, participant)` pair must not both succeed.
#[async_trait]
pub trait ParticipationRepository: Send + Sync + fmt::Debug {
    /// Inserts a participation for the pair.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if a participation already
    /// exists for the pair. Under concurrent inserts for the same pair,
    /// exactly one call succeeds.
    async fn insert(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<()>;

    /// Finds the participation for the pair.
    ///
    /// Returns `None` if no row matches.
    async fn find(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<Option<Participation>>;

    /// Deletes the participation for the pair.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if none matched.
    async fn delete(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<bool>;

    /// Returns the ids of all events the participant has joined.
    async fn event_ids_for(&self, participant_id: &ParticipantId)
        -> RepositoryResult<Vec<EventId>>;

    /// Counts all participation rows.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for event type reference data.
#[async_trait]
pub trait EventTypeRepository: Send + Sync + fmt::Debug {
    /// Saves an event type.
    ///
    /// If the type already exists, it will be updated. Intended for seeding.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the record cannot be stored.
    async fn save(&self, event_type: &EventType) -> RepositoryResult<()>;

    /// Gets an event type by id.
    ///
    /// Returns `None` if the type does not exist.
    async fn get(&self, id: &EventTypeId) -> RepositoryResult<Option<EventType>>;

    /// Gets all event types.
    async fn get_all(&self) -> RepositoryResult<Vec<EventType>>;

    /// Counts all event types.
    async fn count(&self) -> RepositoryResult<u64>;
}
