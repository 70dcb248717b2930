//! # Event Entity
//!
//! An organised event that participants can join.
//!
//! This module provides the [`Event`] entity and the [`NewEvent`] input
//! record used when the persistence store has not yet assigned an
//! identifier. The organiser of an event is fixed at creation; updates may
//! rewrite every other descriptive field.
//!
//! # Examples
//!
//! ```
//! use event_membership::domain::entities::event::NewEvent;
//! use event_membership::domain::value_objects::{EventTypeId, ParticipantId, Timestamp};
//!
//! let start = Timestamp::now();
//! let new_event = NewEvent::new(
//!     "Board games",
//!     "Weekly board game night at the community hall",
//!     start,
//!     start.add_hours(3),
//!     EventTypeId::new(1),
//!     ParticipantId::new("u1"),
//! );
//!
//! assert_eq!(new_event.organiser().as_str(), "u1");
//! ```

use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{EventId, EventTypeId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Minimum event name length in characters.
pub const NAME_MIN_LEN: usize = 5;
/// Maximum event name length in characters.
pub const NAME_MAX_LEN: usize = 20;
/// Minimum event description length in characters.
pub const DESCRIPTION_MIN_LEN: usize = 15;
/// Maximum event description length in characters.
pub const DESCRIPTION_MAX_LEN: usize = 150;

/// Input record for creating an event.
///
/// Carries every [`Event`] field except the identifier, which the
/// persistence store assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    name: String,
    description: String,
    start: Timestamp,
    end: Timestamp,
    event_type: EventTypeId,
    organiser: ParticipantId,
    created_at: Timestamp,
}

impl NewEvent {
    /// Creates a new event record, stamping the creation time.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
        event_type: EventTypeId,
        organiser: ParticipantId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start,
            end,
            event_type,
            organiser,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns the event type identifier.
    #[must_use]
    pub const fn event_type(&self) -> EventTypeId {
        self.event_type
    }

    /// Returns the organiser identifier.
    #[must_use]
    pub const fn organiser(&self) -> &ParticipantId {
        &self.organiser
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// An organised event.
///
/// The identifier is store-assigned; the organiser is immutable after
/// creation. Descriptive fields change only through [`Event::apply_update`].
///
/// # Examples
///
/// ```
/// use event_membership::domain::entities::event::{Event, NewEvent};
/// use event_membership::domain::value_objects::{EventId, EventTypeId, ParticipantId, Timestamp};
///
/// let start = Timestamp::now();
/// let new_event = NewEvent::new(
///     "Board games",
///     "Weekly board game night at the community hall",
///     start,
///     start.add_hours(3),
///     EventTypeId::new(1),
///     ParticipantId::new("u1"),
/// );
/// let event = Event::from_parts(EventId::new(1), new_event);
///
/// assert_eq!(event.id(), EventId::new(1));
/// assert_eq!(event.name(), "Board games");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    description: String,
    start: Timestamp,
    end: Timestamp,
    event_type: EventTypeId,
    organiser: ParticipantId,
    created_at: Timestamp,
}

impl Event {
    /// Builds an event from a store-assigned identifier and a [`NewEvent`].
    ///
    /// Intended for persistence store implementations materializing an
    /// inserted record.
    #[must_use]
    pub fn from_parts(id: EventId, new_event: NewEvent) -> Self {
        Self {
            id,
            name: new_event.name,
            description: new_event.description,
            start: new_event.start,
            end: new_event.end,
            event_type: new_event.event_type,
            organiser: new_event.organiser,
            created_at: new_event.created_at,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    /// Returns the event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns the event type identifier.
    #[must_use]
    pub const fn event_type(&self) -> EventTypeId {
        self.event_type
    }

    /// Returns the organiser identifier.
    #[must_use]
    pub const fn organiser(&self) -> &ParticipantId {
        &self.organiser
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Rewrites the mutable descriptive fields.
    ///
    /// Identifier, organiser, and creation time are untouched.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
        event_type: EventTypeId,
    ) {
        self.name = name.into();
        self.description = description.into();
        self.start = start;
        self.end = end;
        self.event_type = event_type;
    }
}
