use std::time::Duration;

use tokio::time::timeout;

use super::models::{ChatMessage, ChatTurn};
use crate::ai::{ClipMatcher, naive_keywords};
use crate::giphy::GiphyClient;

const CLIP_LIMIT: usize = 5;
const TIMEOUT_BOT_REPLY: &str = "Here's a clip that matches your vibe! 🎬";

/// Run one round of chat for `message`: ask the model for search
/// keywords, then search for clips and write a reply concurrently.
/// Always produces a turn. Slow or failing model calls and clip
/// searches degrade to fallbacks instead of erroring.
pub async fn run_chat_turn(
    matcher: &ClipMatcher,
    giphy: &GiphyClient,
    llm_timeout: Duration,
    message: &str,
) -> ChatTurn {
    // Keywords are needed before searching so this can't run in
    // parallel with the rest
    let search_query = timeout(llm_timeout, matcher.generate_clip_search_query(message))
        .await
        .unwrap_or_else(|_| {
            tracing::warn!("Search query generation timed out, using fallback");
            naive_keywords(message)
        });

    let clips_fut = async {
        giphy
            .search_film_clips(&search_query, CLIP_LIMIT)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Error searching Giphy: {}", e);
                vec![]
            })
    };
    let reply_fut = async {
        timeout(llm_timeout, matcher.generate_bot_response(message, None))
            .await
            .unwrap_or_else(|_| {
                tracing::warn!("Bot response generation timed out, using fallback");
                TIMEOUT_BOT_REPLY.to_string()
            })
    };
    let (clips, reply) = tokio::join!(clips_fut, reply_fut);

    let selected_clip = clips.into_iter().next();
    let user_message = ChatMessage::new_user(message);
    let bot_message = ChatMessage::new_bot(
        &reply,
        selected_clip
            .as_ref()
            .map(|clip| clip.images.fixed_height.url.clone()),
        selected_clip.map(|clip| clip.title),
    );

    ChatTurn {
        user_message,
        bot_message,
        search_query,
    }
}
