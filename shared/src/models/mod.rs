//! Data models
//!
//! Shared between dashboard-server and frontend (via API).
//! All JSON is camelCase on the wire; timestamps are Unix epoch millis.

pub mod entry;
pub mod event;
pub mod report;

// Re-exports
pub use entry::*;
pub use event::*;
pub use report::*;
