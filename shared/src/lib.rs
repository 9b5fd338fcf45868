//! Shared types for the Cube45 villa site
//!
//! Models of the hosted site tables, the content shaping logic used to build
//! page view models, site navigation, and the error/response types used by
//! the server and its clients.

pub mod content;
pub mod error;
pub mod models;
pub mod site;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
