// Port for the process-wide event log.
//
// Responsibilities
// - Keep events in strict append order. Nothing is removed, mutated or deduplicated.
// - Hand out owned snapshots so readers never hold the log while serializing.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn append(&self, event: Event) -> Result<(), EventStoreError>;
    async fn all(&self) -> Result<Vec<Event>, EventStoreError>;
    async fn count(&self) -> Result<usize, EventStoreError>;
}

pub mod in_memory;
