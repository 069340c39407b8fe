//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tempfile::TempDir;

use clipchat::api::AppState;
use clipchat::api::app;
use clipchat::core::AppConfig;
use clipchat::core::db::async_db;
use clipchat::core::db::initialize_db;

/// Creates a test application router backed by a fresh database in a
/// temporary directory. Giphy and the language model are expected to
/// be `mockito` servers at `giphy_api_hostname` and
/// `openai_api_hostname`.
///
/// The directory is removed when the returned `TempDir` is dropped so
/// keep it alive for as long as the router is used.
pub async fn test_app_with_hosts(
    giphy_api_hostname: &str,
    openai_api_hostname: &str,
) -> (Router, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    let db_path = dir.join("db");

    let db = async_db(db_path.to_str().unwrap())
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_config = AppConfig {
        storage_path: dir.display().to_string(),
        db_path: db_path.display().to_string(),
        giphy_api_hostname: giphy_api_hostname.to_string(),
        giphy_api_key: String::from("test-giphy-key"),
        openai_model: String::from("gpt-4o"),
        openai_api_hostname: openai_api_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        llm_timeout_secs: 5,
    };
    let app_state = AppState::new(db, app_config);
    (app(Arc::new(RwLock::new(app_state))), temp_dir)
}

/// A test app whose external services are unreachable
pub async fn test_app() -> (Router, TempDir) {
    test_app_with_hosts("http://127.0.0.1:1", "http://127.0.0.1:1").await
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub const LLM_KEYWORDS_RESPONSE: &str =
    r#"{"choices":[{"message":{"role":"assistant","content":"betrayal trust broken"}}]}"#;

pub const LLM_REPLY_RESPONSE: &str = r#"{"choices":[{"message":{"role":"assistant","content":"Ouch. Here's a scene that gets it."}}]}"#;

pub const GIPHY_RESPONSE: &str = r#"{"data": [{
    "id": "abc123",
    "url": "https://giphy.com/gifs/abc123",
    "title": "Betrayal GIF",
    "images": {
        "original": {"url": "https://media.giphy.com/abc123/giphy.gif"},
        "fixed_height": {"url": "https://media.giphy.com/abc123/200.gif"}
    }
}]}"#;
