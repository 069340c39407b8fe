pub mod matcher;
pub mod prompt;

pub use matcher::{ClipMatcher, DEFAULT_BOT_REPLY, naive_keywords};
