use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),
}
