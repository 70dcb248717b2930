//! # Participation Entity
//!
//! The join-relationship between a participant and an event.
//!
//! A participation is keyed by the `(event, participant)` pair; the store
//! enforces that at most one row exists per pair. Created by a join,
//! destroyed by a leave.

use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{EventId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Membership of a participant in an event.
///
/// # Invariants
///
/// - At most one participation per `(event, participant)` pair
///
/// # Examples
///
/// ```
/// use event_membership::domain::entities::participation::Participation;
/// use event_membership::domain::value_objects::{EventId, ParticipantId};
///
/// let row = Participation::new(EventId::new(1), ParticipantId::new("u2"));
/// assert_eq!(row.event_id(), EventId::new(1));
/// assert_eq!(row.participant_id().as_str(), "u2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    event_id: EventId,
    participant_id: ParticipantId,
    joined_at: Timestamp,
}

impl Participation {
    /// Creates a participation, stamping the join time.
    #[must_use]
    pub fn new(event_id: EventId, participant_id: ParticipantId) -> Self {
        Self {
            event_id,
            participant_id,
            joined_at: Timestamp::now(),
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the participant identifier.
    #[must_use]
    pub const fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }

    /// Returns the join time.
    #[must_use]
    pub const fn joined_at(&self) -> Timestamp {
        self.joined_at
    }

    /// Returns the composite key of this participation.
    #[must_use]
    pub fn key(&self) -> (EventId, ParticipantId) {
        (self.event_id, self.participant_id.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_pairs_event_and_participant() {
        let row = Participation::new(EventId::new(3), ParticipantId::new("u9"));
        assert_eq!(row.key(), (EventId::new(3), ParticipantId::new("u9")));
    }

    #[test]
    fn join_time_is_stamped() {
        let before = Timestamp::now();
        let row = Participation::new(EventId::new(1), ParticipantId::new("u1"));
        assert!(!row.joined_at().is_before(&before));
    }

    #[test]
    fn serde_roundtrip() {
        let row = Participation::new(EventId::new(1), ParticipantId::new("u2"));
        let json = serde_json::to_string(&row).unwrap();
        let back: Participation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
