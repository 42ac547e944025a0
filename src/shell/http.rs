use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::append_event::inbound::http as append_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/events_list", get(list_http::handle))
        .route("/post_event", post(append_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        // Event size is bounded only by available memory.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
