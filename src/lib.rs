//! # Event Membership Core
//!
//! Validates and mutates event join/leave/update state against a pluggable
//! persistence store.
//!
//! The crate is organized in three layers:
//!
//! - [`domain`]: entities ([`Event`](domain::entities::Event),
//!   [`EventType`](domain::entities::EventType),
//!   [`Participation`](domain::entities::Participation)), typed
//!   identifiers, and validation rules
//! - [`application`]: the
//!   [`EventMembershipService`](application::services::EventMembershipService),
//!   its input form, and the error taxonomy
//! - [`infrastructure`]: the repository traits forming the persistence
//!   store contract, plus in-memory implementations
//!
//! # Contract
//!
//! Membership operations fail soft: joining a missing event, joining
//! twice, or leaving an event never joined all come back as `Ok(false)`
//! with no mutation. Malformed input surfaces as a validation error, and
//! store failures propagate; neither is folded into `false`.
//!
//! The store serializes conflicting writes through a uniqueness constraint
//! on the `(event, participant)` pair, so of two concurrent joins for the
//! same pair exactly one succeeds.
//!
//! # Examples
//!
//! ```
//! use event_membership::application::form::EventForm;
//! use event_membership::application::services::membership::EventMembershipService;
//! use event_membership::domain::entities::event_type::EventType;
//! use event_membership::domain::value_objects::{EventTypeId, ParticipantId, Timestamp};
//! use event_membership::infrastructure::persistence::in_memory::{
//!     InMemoryEventRepository, InMemoryEventTypeRepository, InMemoryParticipationRepository,
//! };
//! use event_membership::infrastructure::persistence::traits::EventTypeRepository;
//! use std::sync::Arc;
//!
//! tokio_test::block_on(async {
//!     let event_types = InMemoryEventTypeRepository::new();
//!     event_types
//!         .save(&EventType::new(EventTypeId::new(1), "Games"))
//!         .await
//!         .unwrap();
//!
//!     let service = EventMembershipService::new(
//!         Arc::new(InMemoryEventRepository::new()),
//!         Arc::new(InMemoryParticipationRepository::new()),
//!         Arc::new(event_types),
//!     );
//!
//!     let start = Timestamp::now();
//!     let form = EventForm::new(
//!         "Board games",
//!         "Weekly board game night at the community hall",
//!         start,
//!         start.add_hours(3),
//!         EventTypeId::new(1),
//!     );
//!     let event_id = service
//!         .add_event(&form, &ParticipantId::new("u1"))
//!         .await
//!         .unwrap();
//!
//!     let participant = ParticipantId::new("u2");
//!     assert!(service.join(&event_id, &participant).await.unwrap());
//!     assert!(!service.join(&event_id, &participant).await.unwrap());
//!     assert!(service.leave(&event_id, &participant).await.unwrap());
//! });
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
