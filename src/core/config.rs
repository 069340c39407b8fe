use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub giphy_api_hostname: String,
    pub giphy_api_key: String,
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    // Upper bound on each language model call made during a chat turn
    pub llm_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("CLIPCHAT_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let giphy_api_hostname = env::var("GIPHY_API_HOSTNAME")
            .unwrap_or_else(|_| "https://api.giphy.com".to_string());
        let giphy_api_key = env::var("GIPHY_API_KEY").expect("Missing env var GIPHY_API_KEY");
        let openai_api_hostname = env::var("CLIPCHAT_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("CLIPCHAT_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
        let llm_timeout_secs = env::var("CLIPCHAT_LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Self {
            storage_path,
            db_path,
            giphy_api_hostname,
            giphy_api_key,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            llm_timeout_secs,
        }
    }
}
