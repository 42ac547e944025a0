use async_graphql::{Context, Json, Object, Result as GqlResult};
use serde_json::Value;

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn post_event(&self, context: &Context<'_>, event: Json<Value>) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let confirmation = state
            .append_handler
            .handle(Event::from(event.0))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(confirmation.to_string())
    }
}
