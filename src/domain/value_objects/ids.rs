//! # Identifier Value Objects
//!
//! Typed identifiers for events, participants, and event types.
//!
//! Numeric identifiers ([`EventId`], [`EventTypeId`]) are assigned by the
//! persistence store; [`ParticipantId`] wraps an opaque external identity
//! string issued by whatever authentication system owns participants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an [`Event`](crate::domain::entities::event::Event).
///
/// Store-assigned and unique. Never reused within one store.
///
/// # Examples
///
/// ```
/// use event_membership::domain::value_objects::EventId;
///
/// let id = EventId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Creates an event identifier from a raw value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of an event type (reference data).
///
/// # Examples
///
/// ```
/// use event_membership::domain::value_objects::EventTypeId;
///
/// let id = EventTypeId::new(1);
/// assert_eq!(id.as_i64(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTypeId(i64);

impl EventTypeId {
    /// Creates an event type identifier from a raw value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventTypeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Identifier of a participant.
///
/// Opaque string issued by an external identity provider. The membership
/// core treats it as a key and never inspects its contents.
///
/// # Examples
///
/// ```
/// use event_membership::domain::value_objects::ParticipantId;
///
/// let id = ParticipantId::new("user-7");
/// assert_eq!(id.as_str(), "user-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a participant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn event_id_roundtrip() {
        let id = EventId::new(7);
        assert_eq!(id.as_i64(), 7);
        assert_eq!(id, EventId::from(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn event_id_ordering() {
        assert!(EventId::new(1) < EventId::new(2));
    }

    #[test]
    fn event_type_id_roundtrip() {
        let id = EventTypeId::new(3);
        assert_eq!(id.as_i64(), 3);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn participant_id_from_str_and_string() {
        let a = ParticipantId::from("u1");
        let b = ParticipantId::from("u1".to_string());
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "u1");
    }

    #[test]
    fn participant_id_is_hashable_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ParticipantId::new("u1"), 1);
        assert_eq!(map.get(&ParticipantId::new("u1")), Some(&1));
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&EventId::new(9)).unwrap();
        assert_eq!(json, "9");
        let json = serde_json::to_string(&ParticipantId::new("u1")).unwrap();
        assert_eq!(json, "\"u1\"");
    }
}
