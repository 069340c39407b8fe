//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::ChatMessage;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
    // Included for debugging
    pub search_query: String,
}

#[derive(Deserialize)]
pub struct ChatHistoryQuery {
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}
