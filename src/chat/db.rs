use anyhow::{Error, Result};
use serde_json::json;
use tokio_rusqlite::Connection;

use super::models::ChatMessage;

/// Append messages to a session, creating the session if it doesn't
/// exist yet. All messages are written in a single transaction.
pub async fn append_chat_messages(
    db: &Connection,
    session_id: &str,
    messages: &[ChatMessage],
) -> Result<(), Error> {
    let s_id = session_id.to_owned();
    let data = messages
        .iter()
        .map(|m| json!(m).to_string())
        .collect::<Vec<_>>();

    db.call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute("INSERT OR IGNORE INTO session (id) VALUES (?)", [&s_id])?;
        tx.execute(
            "UPDATE session SET updated_at = CURRENT_TIMESTAMP WHERE id = ?",
            [&s_id],
        )?;
        for d in data {
            tx.execute(
                "INSERT INTO chat_message (session_id, data) VALUES (?, ?)",
                [&s_id, &d],
            )?;
        }
        tx.commit()?;
        Ok(())
    })
    .await?;

    Ok(())
}

/// All messages in a session in the order they were written. Unknown
/// sessions have no history.
pub async fn find_chat_history(
    db: &Connection,
    session_id: &str,
) -> Result<Vec<ChatMessage>, Error> {
    let s_id = session_id.to_owned();
    let rows = db
        .call(move |conn| {
            let mut stmt =
                conn.prepare("SELECT data FROM chat_message WHERE session_id = ? ORDER BY id")?;
            let rows = stmt
                .query_map([s_id], |row| row.get::<_, String>(0))?
                .filter_map(Result::ok)
                .collect::<Vec<String>>();
            Ok(rows)
        })
        .await?;

    let history = rows
        .iter()
        .filter_map(|data| {
            serde_json::from_str::<ChatMessage>(data)
                .inspect_err(|e| tracing::error!("Skipping unreadable chat message: {}", e))
                .ok()
        })
        .collect();
    Ok(history)
}
