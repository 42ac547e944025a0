// In memory implementation of the EventStore port.
//
// Appends take the write lock, reads take the read lock and clone a snapshot,
// so concurrent request handlers can never lose an append.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.inner.write().await.push(event);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn count(&self) -> Result<usize, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.len())
    }
}
