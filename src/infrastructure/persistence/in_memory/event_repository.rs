//! # In-Memory Event Repository
//!
//! In-memory implementation of [`EventRepository`] for testing and
//! embedding.
//!
//! Identifiers are allocated from an atomic counter, mimicking a
//! store-assigned monotonic key.

use crate::domain::entities::event::{Event, NewEvent};
use crate::domain::value_objects::EventId;
use crate::infrastructure::persistence::traits::{EventRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of [`EventRepository`].
///
/// Uses a thread-safe `HashMap` for storage. Suitable for unit tests
/// without database dependencies.
#[derive(Debug, Clone)]
pub struct InMemoryEventRepository {
    storage: Arc<RwLock<HashMap<EventId, Event>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryEventRepository {
    /// Creates a new empty in-memory event repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Returns the number of events in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all events from the repository.
    ///
    /// The id counter is not reset; identifiers are never reused.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, new_event: NewEvent) -> RepositoryResult<Event> {
        let id = EventId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let event = Event::from_parts(id, new_event);
        let mut storage = self.storage.write().await;
        storage.insert(id, event.clone());
        Ok(event)
    }

    async fn get(&self, id: &EventId) -> RepositoryResult<Option<Event>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn update(&self, event: &Event) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        match storage.get_mut(&event.id()) {
            Some(existing) => {
                *existing = event.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Event>> {
        let storage = self.storage.read().await;
        let mut events: Vec<Event> = storage.values().cloned().collect();
        events.sort_by_key(Event::id);
        Ok(events)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{EventTypeId, ParticipantId, Timestamp};

    fn sample_new_event(name: &str) -> NewEvent {
        let start = Timestamp::now();
        NewEvent::new(
            name,
            "An event description long enough to be valid",
            start,
            start.add_hours(2),
            EventTypeId::new(1),
            ParticipantId::new("u1"),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryEventRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryEventRepository::new();

        let first = repo.insert(sample_new_event("First one")).await.unwrap();
        let second = repo.insert(sample_new_event("Second one")).await.unwrap();

        assert_eq!(first.id(), EventId::new(1));
        assert_eq!(second.id(), EventId::new(2));
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryEventRepository::new();
        let inserted = repo.insert(sample_new_event("Board games")).await.unwrap();

        let retrieved = repo.get(&inserted.id()).await.unwrap();
        assert_eq!(retrieved, Some(inserted));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryEventRepository::new();
        let result = repo.get(&EventId::new(99)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn update_existing_returns_true() {
        let repo = InMemoryEventRepository::new();
        let mut event = repo.insert(sample_new_event("Board games")).await.unwrap();

        event.apply_update(
            "Chess night",
            "Casual chess evening, all levels welcome",
            event.start(),
            event.end(),
            event.event_type(),
        );

        assert!(repo.update(&event).await.unwrap());
        let stored = repo.get(&event.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Chess night");
    }

    #[tokio::test]
    async fn update_missing_returns_false_without_insert() {
        let repo = InMemoryEventRepository::new();
        let event = Event::from_parts(EventId::new(7), sample_new_event("Board games"));

        assert!(!repo.update(&event).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_all_is_ordered_by_id() {
        let repo = InMemoryEventRepository::new();
        repo.insert(sample_new_event("First one")).await.unwrap();
        repo.insert(sample_new_event("Second one")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id() < all[1].id());
    }

    #[tokio::test]
    async fn clear_does_not_reuse_ids() {
        let repo = InMemoryEventRepository::new();
        repo.insert(sample_new_event("First one")).await.unwrap();
        repo.clear().await;

        let next = repo.insert(sample_new_event("Second one")).await.unwrap();
        assert_eq!(next.id(), EventId::new(2));
    }
}
