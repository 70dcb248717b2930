//! # In-Memory Event Type Repository
//!
//! In-memory implementation of [`EventTypeRepository`] for testing and
//! embedding. Event types are reference data; tests seed them through
//! [`save`](EventTypeRepository::save).

use crate::domain::entities::event_type::EventType;
use crate::domain::value_objects::EventTypeId;
use crate::infrastructure::persistence::traits::{EventTypeRepository, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`EventTypeRepository`].
///
/// Uses a thread-safe `HashMap` for storage. Suitable for unit tests
/// without database dependencies.
#[derive(Debug, Clone)]
pub struct InMemoryEventTypeRepository {
    storage: Arc<RwLock<HashMap<EventTypeId, EventType>>>,
}

impl InMemoryEventTypeRepository {
    /// Creates a new empty in-memory event type repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of event types.
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
}

impl Default for InMemoryEventTypeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventTypeRepository for InMemoryEventTypeRepository {
    async fn save(&self, event_type: &EventType) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(event_type.id(), event_type.clone());
        Ok(())
    }

    async fn get(&self, id: &EventTypeId) -> RepositoryResult<Option<EventType>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<EventType>> {
        let storage = self.storage.read().await;
        let mut types: Vec<EventType> = storage.values().cloned().collect();
        types.sort_by_key(EventType::id);
        Ok(types)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
