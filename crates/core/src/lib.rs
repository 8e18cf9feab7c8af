//! Pure domain logic for the incident monitoring backend.
//!
//! This crate has no internal dependencies so it can be used by the API,
//! the repository layer, and CLI tooling alike.

pub mod error;
pub mod incident_category;
pub mod scrubber;
pub mod timeline;
pub mod types;
