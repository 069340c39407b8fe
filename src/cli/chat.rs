use std::time::Duration;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use uuid::Uuid;

use crate::ai::ClipMatcher;
use crate::chat::{append_chat_messages, run_chat_turn};
use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};
use crate::giphy::GiphyClient;

pub async fn run(config: AppConfig, session_id: Option<String>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let db = async_db(&config.db_path).await?;
    db.call(|conn| Ok(initialize_db(conn)?)).await?;

    let matcher = ClipMatcher::from_config(&config);
    let giphy = GiphyClient::new(&config.giphy_api_hostname, &config.giphy_api_key);
    let llm_timeout = Duration::from_secs(config.llm_timeout_secs);
    let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
    println!("Session {}", session_id);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                let turn = run_chat_turn(&matcher, &giphy, llm_timeout, &line).await;
                append_chat_messages(
                    &db,
                    &session_id,
                    &[turn.user_message, turn.bot_message.clone()],
                )
                .await?;

                println!("{}", turn.bot_message.text);
                if let Some(url) = turn.bot_message.clip_url {
                    println!(
                        "[{}] {}",
                        turn.bot_message.clip_title.unwrap_or_default(),
                        url
                    );
                }
                println!("(searched: {})", turn.search_query);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
