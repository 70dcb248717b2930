//! # Infrastructure Layer
//!
//! Adapters at the edge of the membership core. Currently persistence
//! only; the repository traits are the outer boundary of this crate.

pub mod persistence;
