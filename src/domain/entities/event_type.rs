//! # Event Type Entity
//!
//! Reference data classifying events.
//!
//! Event types are read-only from the membership core's perspective; they
//! are seeded into the store and only ever looked up here.

use crate::domain::value_objects::EventTypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named classification for events.
///
/// # Examples
///
/// ```
/// use event_membership::domain::entities::event_type::EventType;
/// use event_membership::domain::value_objects::EventTypeId;
///
/// let kind = EventType::new(EventTypeId::new(1), "Games");
/// assert_eq!(kind.name(), "Games");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    id: EventTypeId,
    name: String,
}

impl EventType {
    /// Creates an event type.
    #[must_use]
    pub fn new(id: EventTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the type identifier.
    #[must_use]
    pub const fn id(&self) -> EventTypeId {
        self.id
    }

    /// Returns the type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
