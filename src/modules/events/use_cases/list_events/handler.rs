use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct ListEventsHandler<TEventStore>
where
    TEventStore: EventStore<Event> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ListEventsHandler<TEventStore>
where
    TEventStore: EventStore<Event> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Returns every stored event in insertion order. Never mutates the store.
    pub async fn handle(&self) -> Result<Vec<Event>, ApplicationError> {
        let events = self.event_store.all().await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to list events");
        })?;
        tracing::debug!(count = events.len(), "listed events");
        Ok(events)
    }
}
