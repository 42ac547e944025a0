use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub const EVENT_CREATED: &str = "Event Created!";

pub struct AppendEventHandler<TEventStore>
where
    TEventStore: EventStore<Event> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> AppendEventHandler<TEventStore>
where
    TEventStore: EventStore<Event> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// Appends `event` to the tail of the store. No validation is applied.
    pub async fn handle(&self, event: Event) -> Result<&'static str, ApplicationError> {
        self.event_store.append(event).await.inspect_err(|err| {
            tracing::error!(error = %err, "failed to append event");
        })?;
        match self.event_store.count().await {
            Ok(count) => tracing::info!(count, "event appended"),
            Err(err) => tracing::warn!(error = %err, "event appended, store size unavailable"),
        }
        Ok(EVENT_CREATED)
    }
}
