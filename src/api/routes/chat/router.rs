//! Router for the chat API

use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::{ApiError, bad_request};
use crate::api::state::AppState;
use crate::chat::{append_chat_messages, find_chat_history, run_chat_turn};

type SharedState = Arc<RwLock<AppState>>;

/// Run a chat turn for the message and save both sides of it to the
/// session
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Response, ApiError> {
    let (Some(message), Some(session_id)) = (
        payload.message.filter(|m| !m.is_empty()),
        payload.session_id.filter(|s| !s.is_empty()),
    ) else {
        return Ok(bad_request("message and session_id are required"));
    };

    let (db, matcher, giphy, llm_timeout) = {
        let shared_state = state.read().expect("Unable to read share state");
        (
            shared_state.db.clone(),
            shared_state.matcher.clone(),
            shared_state.giphy.clone(),
            Duration::from_secs(shared_state.config.llm_timeout_secs),
        )
    };

    let turn = run_chat_turn(&matcher, &giphy, llm_timeout, &message).await;
    tracing::debug!(
        "Chat turn for session {} used search query {:?}",
        session_id,
        turn.search_query
    );

    append_chat_messages(
        &db,
        &session_id,
        &[turn.user_message.clone(), turn.bot_message.clone()],
    )
    .await?;

    Ok(Json(public::ChatResponse {
        user_message: turn.user_message,
        bot_message: turn.bot_message,
        search_query: turn.search_query,
    })
    .into_response())
}

/// Get all messages for a chat session
async fn chat_history(
    State(state): State<SharedState>,
    Query(params): Query<public::ChatHistoryQuery>,
) -> Result<Response, ApiError> {
    let Some(session_id) = params.session_id.filter(|s| !s.is_empty()) else {
        return Ok(bad_request("session_id is required"));
    };

    let db = state.read().expect("Unable to read share state").db.clone();
    let messages = find_chat_history(&db, &session_id).await?;

    Ok(Json(public::ChatHistoryResponse { messages }).into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/history", get(chat_history))
}
