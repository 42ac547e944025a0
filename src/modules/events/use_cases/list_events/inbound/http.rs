use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
