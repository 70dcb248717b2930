//! # Event Membership Service
//!
//! Validates and mutates event join/leave/update state against a
//! persistence store.
//!
//! The service follows a fail-soft contract: expected business outcomes
//! (event absent, duplicate join, nothing to leave) come back as `false`
//! rather than errors. Malformed input and store failures are surfaced as
//! [`ApplicationError`].
//!
//! # Examples
//!
//! ```ignore
//! use event_membership::application::services::membership::EventMembershipService;
//! use std::sync::Arc;
//!
//! let service = EventMembershipService::new(events, participations, event_types);
//!
//! let joined = service.join(&event_id, &participant_id).await?;
//! assert!(joined);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::form::EventForm;
use crate::domain::entities::event::{Event, NewEvent};
use crate::domain::entities::event_type::EventType;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::{EventId, EventTypeId, ParticipantId};
use crate::infrastructure::persistence::traits::{
    EventRepository, EventTypeRepository, ParticipationRepository, RepositoryError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Listing read model: an event annotated with its type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Event identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Start time.
    pub start: Timestamp,
    /// Organiser identifier.
    pub organiser: ParticipantId,
    /// Name of the event's type.
    pub type_name: String,
}

/// Detail read model: every descriptive field of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Start time.
    pub start: Timestamp,
    /// End time.
    pub end: Timestamp,
    /// Organiser identifier.
    pub organiser: ParticipantId,
    /// Name of the event's type.
    pub type_name: String,
    /// Creation time.
    pub created_at: Timestamp,
}

/// Service for event membership workflows.
///
/// Owns the per-request business rules only; storage lifetime belongs to
/// the injected repositories. The service holds no state of its own and is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct EventMembershipService {
    events: Arc<dyn EventRepository>,
    participations: Arc<dyn ParticipationRepository>,
    event_types: Arc<dyn EventTypeRepository>,
}

impl EventMembershipService {
    /// Creates a service over the given repositories.
    #[must_use]
    pub fn new(
        events: Arc<dyn EventRepository>,
        participations: Arc<dyn ParticipationRepository>,
        event_types: Arc<dyn EventTypeRepository>,
    ) -> Self {
        Self {
            events,
            participations,
            event_types,
        }
    }

    /// Joins a participant to an event.
    ///
    /// Returns `Ok(false)` without mutating anything when the event does
    /// not exist or the participant is already joined. A store-level
    /// duplicate raised by a concurrent join for the same pair is folded
    /// into `Ok(false)` as well.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn join(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> ApplicationResult<bool> {
        if self.events.get(event_id).await?.is_none() {
            debug!(%event_id, %participant_id, "join refused: event not found");
            return Ok(false);
        }
        if self
            .participations
            .find(event_id, participant_id)
            .await?
            .is_some()
        {
            debug!(%event_id, %participant_id, "join refused: already joined");
            return Ok(false);
        }

        match self.participations.insert(event_id, participant_id).await {
            Ok(()) => {
                debug!(%event_id, %participant_id, "participant joined");
                Ok(true)
            }
            // A concurrent join for the same pair won the race; the unique
            // constraint reports it as a duplicate. Same outcome as the
            // pre-check above.
            Err(err) if err.is_duplicate() => {
                warn!(%event_id, %participant_id, "join lost insert race");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a participant from an event.
    ///
    /// Returns `Ok(false)` when no matching participation exists.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn leave(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> ApplicationResult<bool> {
        let deleted = self.participations.delete(event_id, participant_id).await?;
        if deleted {
            debug!(%event_id, %participant_id, "participant left");
        } else {
            debug!(%event_id, %participant_id, "leave refused: not joined");
        }
        Ok(deleted)
    }

    /// Returns whether the participant is joined to the event.
    ///
    /// `Ok(false)` when the event does not exist or no participation
    /// matches.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn is_joined(
        &self,
        event_id: &EventId,
        participant_id: &ParticipantId,
    ) -> ApplicationResult<bool> {
        if self.events.get(event_id).await?.is_none() {
            return Ok(false);
        }
        Ok(self
            .participations
            .find(event_id, participant_id)
            .await?
            .is_some())
    }

    /// Creates an event owned by `organiser_id`.
    ///
    /// Returns the store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` when the form is malformed or
    /// references an unknown event type, `ApplicationError::Repository` on
    /// store failure.
    pub async fn add_event(
        &self,
        form: &EventForm,
        organiser_id: &ParticipantId,
    ) -> ApplicationResult<EventId> {
        form.validate()?;
        self.require_event_type(form.event_type).await?;

        let event = self
            .events
            .insert(NewEvent::new(
                form.name.clone(),
                form.description.clone(),
                form.start,
                form.end,
                form.event_type,
                organiser_id.clone(),
            ))
            .await?;
        debug!(event_id = %event.id(), organiser = %organiser_id, "event created");
        Ok(event.id())
    }

    /// Updates an event's descriptive fields.
    ///
    /// Returns `Ok(false)` without mutating anything when the event does
    /// not exist; existence is checked before the form is looked at, so a
    /// malformed form against a missing event is still `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` when the form is malformed or
    /// references an unknown event type, `ApplicationError::Repository` on
    /// store failure.
    pub async fn update_event(
        &self,
        event_id: &EventId,
        form: &EventForm,
        requester_id: &ParticipantId,
    ) -> ApplicationResult<bool> {
        let Some(mut event) = self.events.get(event_id).await? else {
            debug!(%event_id, "update refused: event not found");
            return Ok(false);
        };

        form.validate()?;
        self.require_event_type(form.event_type).await?;

        // TODO: reject updates where requester_id != organiser. The
        // requester is threaded through but never checked; callers
        // currently rely on outer route guards.
        let _ = requester_id;

        event.apply_update(
            form.name.clone(),
            form.description.clone(),
            form.start,
            form.end,
            form.event_type,
        );
        let updated = self.events.update(&event).await?;
        if updated {
            debug!(%event_id, "event updated");
        }
        Ok(updated)
    }

    /// Returns all events the participant has joined, annotated with their
    /// type names.
    ///
    /// Ordered by event id.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure or when a
    /// participation references an event type that no longer exists.
    pub async fn joined_events(
        &self,
        participant_id: &ParticipantId,
    ) -> ApplicationResult<Vec<EventSummary>> {
        let event_ids = self.participations.event_ids_for(participant_id).await?;
        let mut summaries = Vec::with_capacity(event_ids.len());
        for event_id in &event_ids {
            let Some(event) = self.events.get(event_id).await? else {
                warn!(%event_id, %participant_id, "participation references missing event");
                continue;
            };
            summaries.push(self.summarize(&event).await?);
        }
        Ok(summaries)
    }

    /// Returns every event, annotated with its type name.
    ///
    /// Ordered by event id.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn all_events(&self) -> ApplicationResult<Vec<EventSummary>> {
        let events = self.events.get_all().await?;
        let mut summaries = Vec::with_capacity(events.len());
        for event in &events {
            summaries.push(self.summarize(event).await?);
        }
        Ok(summaries)
    }

    /// Returns the full detail read model for an event.
    ///
    /// `Ok(None)` when the event does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn event_details(
        &self,
        event_id: &EventId,
    ) -> ApplicationResult<Option<EventDetails>> {
        let Some(event) = self.events.get(event_id).await? else {
            return Ok(None);
        };
        let type_name = self.type_name(event.event_type()).await?;
        Ok(Some(EventDetails {
            id: event.id(),
            name: event.name().to_string(),
            description: event.description().to_string(),
            start: event.start(),
            end: event.end(),
            organiser: event.organiser().clone(),
            type_name,
            created_at: event.created_at(),
        }))
    }

    /// Returns an event's editable fields as a form.
    ///
    /// `Ok(None)` when the event does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn event_for_edit(&self, event_id: &EventId) -> ApplicationResult<Option<EventForm>> {
        let event = self.events.get(event_id).await?;
        Ok(event.as_ref().map(EventForm::from_event))
    }

    /// Returns the organiser of an event.
    ///
    /// `Ok(None)` when the event does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn organiser_id(
        &self,
        event_id: &EventId,
    ) -> ApplicationResult<Option<ParticipantId>> {
        let event = self.events.get(event_id).await?;
        Ok(event.map(|e| e.organiser().clone()))
    }

    /// Returns all event types, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` on store failure.
    pub async fn all_types(&self) -> ApplicationResult<Vec<EventType>> {
        Ok(self.event_types.get_all().await?)
    }

    async fn summarize(&self, event: &Event) -> ApplicationResult<EventSummary> {
        let type_name = self.type_name(event.event_type()).await?;
        Ok(EventSummary {
            id: event.id(),
            name: event.name().to_string(),
            start: event.start(),
            organiser: event.organiser().clone(),
            type_name,
        })
    }

    async fn type_name(&self, type_id: EventTypeId) -> ApplicationResult<String> {
        match self.event_types.get(&type_id).await? {
            Some(event_type) => Ok(event_type.name().to_string()),
            // Types are validated on create/update, so a missing one means
            // the store lost reference data.
            None => Err(ApplicationError::Repository(RepositoryError::not_found(
                "EventType",
                type_id.to_string(),
            ))),
        }
    }

    async fn require_event_type(&self, type_id: EventTypeId) -> ApplicationResult<()> {
        if self.event_types.get(&type_id).await?.is_none() {
            return Err(DomainError::UnknownEventType(type_id).into());
        }
        Ok(())
    }
}
