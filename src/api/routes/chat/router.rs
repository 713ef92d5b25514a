//! Router for the chat API

use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;

/// Get the current conversation for rendering. Waits behind any
/// submission in flight so it never renders a half applied turn.
async fn chat_view(State(state): State<SharedState>) -> Json<public::ChatResponse> {
    let session = state.session.lock().await;
    Json(public::ChatResponse::from_session(&session))
}

/// Send a message and return the updated conversation. On failure the
/// conversation is left exactly as it was.
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let mut session = state.session.lock().await;
    session.submit(&payload.message).await?;
    tracing::debug!(
        "Chat session now has {} exchanges",
        session.display_log().len()
    );

    Ok(Json(public::ChatResponse::from_session(&session)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(chat_view).post(chat_handler))
}
