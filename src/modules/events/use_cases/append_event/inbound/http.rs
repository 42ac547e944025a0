use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

// The body is taken as raw bytes so no payload is ever rejected.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let event = Event::from_raw(&body);

    match state.append_handler.handle(event).await {
        Ok(confirmation) => (StatusCode::CREATED, confirmation).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
