use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::append_event::handler::AppendEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore<Event>>>,
    pub append_handler: Arc<AppendEventHandler<InMemoryEventStore<Event>>>,
}

impl AppState {
    /// Wires both use cases against one shared store.
    pub fn new(event_store: Arc<InMemoryEventStore<Event>>) -> Self {
        Self {
            list_handler: Arc::new(ListEventsHandler::new(event_store.clone())),
            append_handler: Arc::new(AppendEventHandler::new(event_store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()))
    }
}
