//! Repository Module
//!
//! Storage seam for events and entries. Everything above this layer
//! depends only on [`EventRepository`]; the bundled [`MemoryRepository`]
//! keeps records in process memory and is the placeholder for a future
//! persistent backend.

pub mod memory;
pub mod seed;

pub use memory::MemoryRepository;

use async_trait::async_trait;
use thiserror::Error;

use shared::models::{
    Event, EventCreate, EventEntry, EventEntryCreate, EventEntryUpdate, EventUpdate,
};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// CRUD contract for events and their entries
///
/// Absence is data, not an error: lookups return `Option`, deletes
/// return whether the record existed. Deleting an event cascades to
/// its entries.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, date descending (created_at descending tiebreak)
    async fn list_events(&self) -> RepoResult<Vec<Event>>;

    async fn get_event(&self, id: &str) -> RepoResult<Option<Event>>;

    /// Persist a new event with a generated id and timestamp
    async fn create_event(&self, data: EventCreate) -> RepoResult<Event>;

    /// Partial update; `None` when the id has no match
    async fn update_event(&self, id: &str, data: EventUpdate) -> RepoResult<Option<Event>>;

    /// Delete an event and all entries referencing it
    async fn delete_event(&self, id: &str) -> RepoResult<bool>;

    /// Entries, newest first (entry date descending, created_at
    /// descending tiebreak), optionally filtered to one event
    async fn list_entries(&self, event_id: Option<&str>) -> RepoResult<Vec<EventEntry>>;

    async fn get_entry(&self, id: &str) -> RepoResult<Option<EventEntry>>;

    async fn create_entry(&self, data: EventEntryCreate) -> RepoResult<EventEntry>;

    async fn update_entry(
        &self,
        id: &str,
        data: EventEntryUpdate,
    ) -> RepoResult<Option<EventEntry>>;

    async fn delete_entry(&self, id: &str) -> RepoResult<bool>;
}
