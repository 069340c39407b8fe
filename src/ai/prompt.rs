//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers. User messages end up in
//! these prompts so they should be considered untrusted.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Prompt {
    ClipKeywords,
    BotReply,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const CLIP_KEYWORDS_PROMPT: &str = r#"
You are an AI that helps find relevant film clips for user messages.
Generate 2-4 SHORT, specific keywords that would help find appropriate movie/film clips or GIFs.

IMPORTANT CONSTRAINTS:
- Maximum 50 characters total for all keywords combined
- Focus on the MOST important emotions, actions, or themes
- Prioritize: emotions > actions > descriptive words
- Avoid generic words like "good", "bad", "nice"
- Don't include "movie", "film", "cinema" (added automatically)

Examples:
"I'm feeling betrayed by my friend" → "betrayal trust broken"
"Having an identity crisis at work" → "identity crisis confusion"
"So excited for the weekend!" → "excited celebration joy"

User message: "{{message}}"

Respond with ONLY the keywords, separated by spaces. Keep it under 50 characters total.
"#;

const BOT_REPLY_PROMPT: &str = r#"
You are a friendly chat bot that responds to user messages with film/movie references and shares relevant clips.

User message: "{{message}}"
{{#if clip_title}}
Selected clip: "{{clip_title}}"
{{/if}}

Generate a brief, conversational response (1-2 sentences) that:
- Acknowledges the user's message
- References the film clip you're sharing (if provided)
- Maintains a casual, friendly tone
- Relates to movies/cinema when appropriate

Keep it short and engaging!
"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::ClipKeywords.to_string(), CLIP_KEYWORDS_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::BotReply.to_string(), BOT_REPLY_PROMPT)
        .expect("Failed to register template");
    registry
}
