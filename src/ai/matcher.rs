//! Uses the language model to pick search keywords for a message and
//! to write the bot's reply. Neither call is allowed to fail a chat
//! turn, errors are logged and replaced with a canned fallback.
use anyhow::{Error, Result};
use serde_json::json;

use super::prompt::{Prompt, templates};
use crate::core::AppConfig;
use crate::openai::{Message, Role, completion_content};

pub const DEFAULT_BOT_REPLY: &str = "I found a great clip that matches your vibe! 🎬";

/// The first three words of the message, used when the model can't
/// produce keywords.
pub fn naive_keywords(message: &str) -> String {
    message.split(' ').take(3).collect::<Vec<_>>().join(" ")
}

#[derive(Clone, Debug)]
pub struct ClipMatcher {
    api_hostname: String,
    api_key: String,
    model: String,
}

impl ClipMatcher {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.openai_api_hostname,
            &config.openai_api_key,
            &config.openai_model,
        )
    }

    async fn ask(&self, prompt: Prompt, data: serde_json::Value) -> Result<String, Error> {
        let prompt = templates().render(&prompt.to_string(), &data)?;
        let messages = vec![Message::new(Role::User, &prompt)];
        completion_content(&messages, &self.api_hostname, &self.api_key, &self.model).await
    }

    /// Ask the model for a few short keywords describing `message`.
    pub async fn generate_clip_search_query(&self, message: &str) -> String {
        match self
            .ask(Prompt::ClipKeywords, json!({"message": message}))
            .await
        {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::error!("Error generating search query: {}", e);
                naive_keywords(message)
            }
        }
    }

    pub async fn generate_bot_response(&self, message: &str, clip_title: Option<&str>) -> String {
        let data = json!({
            "message": message,
            "clip_title": clip_title.unwrap_or_default(),
        });
        match self.ask(Prompt::BotReply, data).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Error generating bot response: {}", e);
                DEFAULT_BOT_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    #[test]
    fn test_naive_keywords() {
        assert_eq!(naive_keywords("so excited for the weekend"), "so excited for");
        assert_eq!(naive_keywords("hi"), "hi");
        assert_eq!(naive_keywords(""), "");
    }

    #[tokio::test]
    async fn test_generate_clip_search_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Regex("identity crisis at work".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"identity crisis confusion"}}]}"#)
            .create_async()
            .await;

        let matcher = ClipMatcher::new(&server.url(), "test-key", "gpt-4");
        let query = matcher
            .generate_clip_search_query("Having an identity crisis at work")
            .await;

        mock.assert_async().await;
        assert_eq!(query, "identity crisis confusion");
    }

    #[tokio::test]
    async fn test_generate_clip_search_query_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let matcher = ClipMatcher::new(&server.url(), "test-key", "gpt-4");
        let query = matcher
            .generate_clip_search_query("So excited for the weekend!")
            .await;
        assert_eq!(query, "So excited for");
    }

    #[tokio::test]
    async fn test_generate_bot_response_falls_back() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create_async()
            .await;

        let matcher = ClipMatcher::new(&server.url(), "test-key", "gpt-4");
        let reply = matcher.generate_bot_response("hello", Some("Wave GIF")).await;
        assert_eq!(reply, DEFAULT_BOT_REPLY);
    }
}
