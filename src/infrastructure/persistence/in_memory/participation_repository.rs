//! # In-Memory Participation Repository
//!
//! In-memory implementation of [`ParticipationRepository`] for testing and
//! embedding.
//!
//! The check-and-insert in [`insert`](ParticipationRepository::insert) runs
//! under a single write-lock acquisition, so concurrent duplicate joins
//! observe the same serialization a database unique constraint provides.

use crate::domain::entities::participation::Participation;
use crate::domain::value_objects::{EventId, ParticipantId};
use crate::infrastructure::persistence::traits::{
    ParticipationRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ParticipationRepository`].
///
/// Uses a thread-safe `HashMap` keyed by the `(event, participant)` pair.
/// Suitable for unit tests without database dependencies.
#[derive(Debug, Clone)]
pub struct InMemoryParticipationRepository {
    storage: Arc<RwLock<HashMap<(EventId, ParticipantId), Participation>>>,
}

impl InMemoryParticipationRepository {
    /// Creates a new empty in-memory participation repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of participation rows.
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

    /// Clears all participation rows.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    fn pair_key(event_id: &EventId, participant_id: &ParticipantId) -> String {
        format!("{event_id}/{participant_id}")
    }
}

impl Default for InMemoryParticipationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepository {
    async fn insert(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        let key = (*event_id, participant_id.clone());
        if storage.contains_key(&key) {
            return Err(RepositoryError::duplicate(
                "Participation",
                Self::pair_key(event_id, participant_id),
            ));
        }
        storage.insert(key, Participation::new(*event_id, participant_id.clone()));
        Ok(())
    }

    async fn find(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<Option<Participation>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&(*event_id, participant_id.clone())).cloned())
    }

    async fn delete(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage
            .remove(&(*event_id, participant_id.clone()))
            .is_some())
    }

    async fn event_ids_for(
        &self,
        participant_id: &ParticipantId,
    ) -> RepositoryResult<Vec<EventId>> {
        let storage = self.storage.read().await;
        let mut ids: Vec<EventId> = storage
            .keys()
            .filter(|(_, pid)| pid == participant_id)
            .map(|(eid, _)| *eid)
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
