use async_graphql::{Context, Json, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All events in insertion order.
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<Json<Event>>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .list_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(events.into_iter().map(Json).collect())
    }
}
