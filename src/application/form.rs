//! # Event Form
//!
//! Validated input model for creating and updating events.
//!
//! The form carries every caller-editable field of an event. Validation
//! covers the structural rules (field lengths, time ordering); whether the
//! referenced event type exists is checked by the service against the
//! store.
//!
//! # Examples
//!
//! ```
//! use event_membership::application::form::EventForm;
//! use event_membership::domain::value_objects::{EventTypeId, Timestamp};
//!
//! let start = Timestamp::now();
//! let form = EventForm::new(
//!     "Board games",
//!     "Weekly board game night at the community hall",
//!     start,
//!     start.add_hours(3),
//!     EventTypeId::new(1),
//! );
//!
//! assert!(form.validate().is_ok());
//! ```

use crate::domain::entities::event::{
    DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN, Event, NAME_MAX_LEN, NAME_MIN_LEN,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::EventTypeId;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields for creating or updating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventForm {
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Start time.
    pub start: Timestamp,
    /// End time.
    pub end: Timestamp,
    /// Referenced event type.
    pub event_type: EventTypeId,
}

impl EventForm {
    /// Creates a form from its fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start: Timestamp,
        end: Timestamp,
        event_type: EventTypeId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start,
            end,
            event_type,
        }
    }

    /// Extracts the editable fields of an existing event into a form.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name().to_string(),
            description: event.description().to_string(),
            start: event.start(),
            end: event.end(),
            event_type: event.event_type(),
        }
    }

    /// Validates the structural rules of the form.
    ///
    /// Lengths are measured in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: name length, description length,
    /// then time ordering.
    pub fn validate(&self) -> DomainResult<()> {
        let name_len = self.name.chars().count();
        if name_len < NAME_MIN_LEN || name_len > NAME_MAX_LEN {
            return Err(DomainError::name_length(name_len, NAME_MIN_LEN, NAME_MAX_LEN));
        }

        let description_len = self.description.chars().count();
        if description_len < DESCRIPTION_MIN_LEN || description_len > DESCRIPTION_MAX_LEN {
            return Err(DomainError::description_length(
                description_len,
                DESCRIPTION_MIN_LEN,
                DESCRIPTION_MAX_LEN,
            ));
        }

        if !self.end.is_after(&self.start) {
            return Err(DomainError::EndNotAfterStart);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> EventForm {
        let start = Timestamp::now();
        EventForm::new(
            "Board games",
            "Weekly board game night at the community hall",
            start,
            start.add_hours(3),
            EventTypeId::new(1),
        )
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn name_too_short_is_rejected() {
        let mut form = valid_form();
        form.name = "Ab".to_string();
        let err = form.validate().unwrap_err();
        assert!(err.is_length_violation());
    }

    #[test]
    fn name_too_long_is_rejected() {
        let mut form = valid_form();
        form.name = "x".repeat(21);
        assert!(form.validate().is_err());
    }

    #[test]
    fn name_bounds_are_inclusive() {
        let mut form = valid_form();
        form.name = "x".repeat(5);
        assert!(form.validate().is_ok());
        form.name = "x".repeat(20);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let mut form = valid_form();
        form.name = "é".repeat(20);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut form = valid_form();
        form.description = String::new();
        let err = form.validate().unwrap_err();
        assert_eq!(err, DomainError::description_length(0, 15, 150));
    }

    #[test]
    fn description_too_long_is_rejected() {
        let mut form = valid_form();
        form.description = "x".repeat(151);
        assert!(form.validate().is_err());
    }

    #[test]
    fn end_equal_to_start_is_rejected() {
        let mut form = valid_form();
        form.end = form.start;
        assert_eq!(form.validate().unwrap_err(), DomainError::EndNotAfterStart);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = valid_form();
        form.end = form.start;
        form.start = form.start.add_hours(1);
        assert_eq!(form.validate().unwrap_err(), DomainError::EndNotAfterStart);
    }

    #[test]
    fn from_event_roundtrips_editable_fields() {
        use crate::domain::entities::event::NewEvent;
        use crate::domain::value_objects::{EventId, ParticipantId};

        let form = valid_form();
        let event = Event::from_parts(
            EventId::new(1),
            NewEvent::new(
                form.name.clone(),
                form.description.clone(),
                form.start,
                form.end,
                form.event_type,
                ParticipantId::new("u1"),
            ),
        );

        assert_eq!(EventForm::from_event(&event), form);
    }
}
