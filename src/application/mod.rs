//! # Application Layer
//!
//! Use-case orchestration over the domain and persistence layers.
//!
//! - [`services::membership`]: the membership service itself
//! - [`form`]: validated input model for create/update
//! - [`error`]: the application error taxonomy and its fail-soft policy

pub mod error;
pub mod form;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use form::EventForm;
