use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sound: Option<bool>,
}

impl ChatMessage {
    pub fn new_user(text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_user: true,
            timestamp: Utc::now(),
            clip_url: None,
            clip_title: None,
            has_sound: None,
        }
    }

    pub fn new_bot(text: &str, clip_url: Option<String>, clip_title: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            is_user: false,
            timestamp: Utc::now(),
            clip_url,
            clip_title,
            has_sound: None,
        }
    }
}

/// The result of one round of chat: what the user said, what the bot
/// replied with, and the keywords used to find the clip.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
    pub search_query: String,
}
