//! Shared types for the Nightflow dashboard
//!
//! Domain models and API DTOs used by the dashboard server and any
//! client that talks to it.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
