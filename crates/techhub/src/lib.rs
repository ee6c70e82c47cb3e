//! Core crate for the TechHub job board services.
//!
//! Holds the posting-form validation rule set and its HTTP surface, the
//! application-method payload codec, and the shared service scaffolding
//! (configuration, telemetry, error types).

pub mod config;
pub mod error;
pub mod jobs;
pub mod telemetry;
