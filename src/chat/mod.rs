//! Chat turns and their persistence
pub mod db;
mod models;
mod turn;

pub use db::{append_chat_messages, find_chat_history};
pub use models::{ChatMessage, ChatTurn};
pub use turn::run_chat_turn;
