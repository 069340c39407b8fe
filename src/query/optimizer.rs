//! Compresses free text into a short keyword query for the clip
//! search API.
//!
//! Giphy rejects query parameters much over ~100 characters, and URL
//! encoding inflates spaces and punctuation, so queries are capped at
//! `MAX_QUERY_LENGTH`. Short text passes through untouched. Longer
//! text is reduced to its highest scoring keywords, packed greedily
//! until the next keyword no longer fits.
//!
//! Every function here is total: any input string produces a query
//! and nothing returns an error.
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::lexicon::{
    has_descriptive_suffix, is_action_word, is_emotion_word, is_film_word, is_stop_word,
};

pub const MAX_QUERY_LENGTH: usize = 80;
pub const MIN_QUERY_LENGTH: usize = 3;

const FILM_CONTEXT: &str = "movie";
const FILM_CONTEXT_FALLBACK: &str = "movie scene";
const BARE_FALLBACK: &str = "emotion";

static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Static pattern, compilation can't fail
    Regex::new(r"[^0-9A-Za-z_\s]").expect("Invalid punctuation regex")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Emotion,
    Action,
    Film,
    Descriptive,
    Generic,
}

impl Category {
    /// Word list membership wins over the suffix heuristic, in the
    /// order emotion, action, film.
    pub fn classify(word: &str) -> Self {
        if is_emotion_word(word) {
            Category::Emotion
        } else if is_action_word(word) {
            Category::Action
        } else if is_film_word(word) {
            Category::Film
        } else if has_descriptive_suffix(word) {
            Category::Descriptive
        } else {
            Category::Generic
        }
    }

    pub fn base_score(&self) -> u32 {
        match self {
            Category::Emotion => 10,
            Category::Action => 7,
            Category::Film => 6,
            Category::Descriptive => 5,
            Category::Generic => 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredKeyword {
    pub word: String,
    pub score: u32,
    pub category: Category,
}

impl ScoredKeyword {
    pub fn new(word: &str) -> Self {
        let category = Category::classify(word);
        let mut score = category.base_score();
        // Longer words tend to be more specific
        if word.len() > 6 {
            score += 1;
        }
        if word.len() > 8 {
            score += 1;
        }
        Self {
            word: word.to_string(),
            score,
            category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryValidation {
    pub is_valid: bool,
    pub length: usize,
    pub max_length: usize,
}

/// Lower cases the text, turns punctuation into spaces, and collapses
/// whitespace. The result only ever contains ASCII letters, digits,
/// underscores, and single spaces.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = PUNCTUATION_RE.replace_all(&lower, " ");
    WHITESPACE_RE
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Scores every keyword in `words`, highest first. Short words and
/// stop words are dropped. Keywords with the same score keep their
/// original order.
pub fn score_keywords<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<ScoredKeyword> {
    let mut keywords: Vec<ScoredKeyword> = words
        .into_iter()
        .filter(|word| word.len() > 2 && !is_stop_word(word))
        .map(ScoredKeyword::new)
        .collect();
    keywords.sort_by(|a, b| b.score.cmp(&a.score));
    keywords
}

/// Adds keywords in score order until the next one would push the
/// query past `MAX_QUERY_LENGTH`. Packing stops at the first keyword
/// that doesn't fit even if a later, shorter one would.
fn pack_keywords(keywords: &[ScoredKeyword], add_film_context: bool) -> String {
    let mut query = String::with_capacity(MAX_QUERY_LENGTH);
    if add_film_context {
        query.push_str(FILM_CONTEXT);
    }

    for keyword in keywords {
        let separator = usize::from(!query.is_empty());
        if query.len() + separator + keyword.word.len() > MAX_QUERY_LENGTH {
            break;
        }
        if separator > 0 {
            query.push(' ');
        }
        query.push_str(&keyword.word);
    }

    query
}

/// Reduces `text` to a query of at most `MAX_QUERY_LENGTH`
/// characters, optionally anchored with the word "movie".
///
/// With film context the result is always between
/// `MIN_QUERY_LENGTH` and `MAX_QUERY_LENGTH`. Without it, very short
/// text is returned as is, and a lone keyword longer than the limit
/// is returned whole.
pub fn optimize_query(text: &str, add_film_context: bool) -> String {
    tracing::debug!("Optimizing query: {:?}", text);

    let clean = normalize(text);
    let candidate = match (add_film_context, clean.is_empty()) {
        (true, true) => FILM_CONTEXT.to_string(),
        (true, false) => format!("{} {}", clean, FILM_CONTEXT),
        (false, _) => clean.clone(),
    };
    if candidate.len() <= MAX_QUERY_LENGTH {
        tracing::debug!("Query within limits: {:?}", candidate);
        return candidate;
    }

    let keywords = score_keywords(clean.split(' '));
    tracing::debug!(
        "Scored keywords: {:?}",
        keywords
            .iter()
            .map(|k| format!("{}({})", k.word, k.score))
            .collect::<Vec<_>>()
    );

    let query = pack_keywords(&keywords, add_film_context);
    if query.len() < MIN_QUERY_LENGTH {
        let fallback = if add_film_context {
            FILM_CONTEXT_FALLBACK.to_string()
        } else {
            keywords
                .first()
                .map(|k| k.word.clone())
                .unwrap_or_else(|| BARE_FALLBACK.to_string())
        };
        tracing::debug!("Using fallback query: {:?}", fallback);
        return fallback;
    }

    tracing::debug!("Optimized query: {:?} ({} chars)", query, query.len());
    query
}

pub fn validate_query_length(query: &str) -> QueryValidation {
    let length = query.chars().count();
    QueryValidation {
        is_valid: (MIN_QUERY_LENGTH..=MAX_QUERY_LENGTH).contains(&length),
        length,
        max_length: MAX_QUERY_LENGTH,
    }
}

/// A simpler query made from the two best keywords plus "movie". This
/// doesn't enforce the length limit itself, two words and "movie" are
/// short enough in practice.
pub fn create_fallback_query(text: &str) -> String {
    let clean = normalize(text);
    let keywords = score_keywords(clean.split(' '));
    let fallback = keywords
        .iter()
        .take(2)
        .map(|k| k.word.as_str())
        .chain(std::iter::once(FILM_CONTEXT))
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!("Created fallback query: {:?}", fallback);
    fallback
}

/// Optimizes `text` for a clip search, retrying with the simpler
/// fallback query when the optimized one is still out of bounds.
pub fn prepare_search_query(text: &str) -> String {
    let query = optimize_query(text, true);
    let validation = validate_query_length(&query);
    if validation.is_valid {
        return query;
    }

    tracing::warn!(
        "Query still out of bounds after optimization: {}/{} chars",
        validation.length,
        validation.max_length
    );
    create_fallback_query(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text() -> String {
        format!(
            "{}happy running scene walked table",
            "the and it was ".repeat(8)
        )
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
        assert_eq!(normalize("I'm\tfine\n\nreally"), "i m fine really");
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("?!..."), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_category_precedence() {
        // In the emotion list and ends with "ed"
        assert_eq!(Category::classify("excited"), Category::Emotion);
        // In the action list and ends with "ing"
        assert_eq!(Category::classify("running"), Category::Action);
        assert_eq!(Category::classify("thriller"), Category::Film);
        assert_eq!(Category::classify("betrayed"), Category::Descriptive);
        assert_eq!(Category::classify("quickly"), Category::Descriptive);
        assert_eq!(Category::classify("friend"), Category::Generic);
    }

    #[test]
    fn test_keyword_score_length_bonus() {
        assert_eq!(ScoredKeyword::new("happy").score, 10);
        assert_eq!(ScoredKeyword::new("excited").score, 11);
        assert_eq!(ScoredKeyword::new("disappointed").score, 12);
        assert_eq!(ScoredKeyword::new("table").score, 2);
        assert_eq!(ScoredKeyword::new("wonderful").score, 4);
    }

    #[test]
    fn test_score_keywords_filters_and_sorts() {
        let keywords = score_keywords(["the", "ok", "table", "happy", "chair", "running"]);
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        // Ties keep their original order
        assert_eq!(words, vec!["happy", "running", "table", "chair"]);
    }

    #[test]
    fn test_optimize_fast_path() {
        assert_eq!(
            optimize_query("I'm feeling betrayed by my friend and it really hurts", true),
            "i m feeling betrayed by my friend and it really hurts movie"
        );
        assert_eq!(
            optimize_query("So excited for the weekend!", false),
            "so excited for the weekend"
        );
    }

    #[test]
    fn test_optimize_empty_input() {
        assert_eq!(optimize_query("", true), "movie");
        assert_eq!(optimize_query("!!!", true), "movie");
        assert_eq!(optimize_query("", false), "");
    }

    #[test]
    fn test_optimize_packs_keywords_by_score() {
        let text = long_text();
        assert!(normalize(&text).len() > MAX_QUERY_LENGTH);

        let query = optimize_query(&text, true);
        assert_eq!(query, "movie happy running scene walked table");

        let query = optimize_query(&text, false);
        assert_eq!(query, "happy running scene walked table");
    }

    #[test]
    fn test_optimize_stops_at_first_keyword_that_does_not_fit() {
        let text = format!("happy sad {} dog", "x".repeat(71));
        let query = optimize_query(&text, false);
        assert_eq!(query, "happy sad");
    }

    #[test]
    fn test_optimize_never_exceeds_max_length() {
        let text = "I have been feeling so disappointed and frustrated lately because \
                    my friends keep leaving without saying anything and honestly it \
                    makes me anxious and worried about whether anyone actually cares \
                    about me at all or if I am just imagining everything happening";
        let query = optimize_query(text, true);
        assert!(query.len() <= MAX_QUERY_LENGTH);
        assert!(query.len() >= MIN_QUERY_LENGTH);
        assert!(query.starts_with("movie disappointed frustrated"));
        for word in query.split(' ') {
            assert!(!is_stop_word(word), "stop word {word} in {query}");
        }
    }

    #[test]
    fn test_optimize_fallbacks() {
        let only_stop_words = "the and ".repeat(12);
        assert_eq!(optimize_query(&only_stop_words, false), "emotion");
        assert_eq!(optimize_query(&only_stop_words, true), "movie");

        let one_keyword = format!("{}table", only_stop_words);
        assert_eq!(optimize_query(&one_keyword, false), "table");

        let huge_word = "z".repeat(120);
        assert_eq!(optimize_query(&huge_word, true), "movie");
    }

    #[test]
    fn test_optimize_is_deterministic() {
        let text = long_text();
        let first = optimize_query(&text, true);
        for _ in 0..10 {
            assert_eq!(optimize_query(&text, true), first);
        }
    }

    #[test]
    fn test_validate_query_length() {
        assert_eq!(
            validate_query_length("xy"),
            QueryValidation {
                is_valid: false,
                length: 2,
                max_length: 80
            }
        );
        assert!(validate_query_length("abc").is_valid);
        assert!(validate_query_length(&"a".repeat(80)).is_valid);
        assert!(!validate_query_length(&"a".repeat(81)).is_valid);
    }

    #[test]
    fn test_query_validation_serialization() {
        let json = serde_json::to_string(&validate_query_length("movie")).unwrap();
        assert_eq!(json, r#"{"isValid":true,"length":5,"maxLength":80}"#);
    }

    #[test]
    fn test_create_fallback_query() {
        assert_eq!(
            create_fallback_query("I'm feeling betrayed by my friend"),
            "feeling betrayed movie"
        );
        assert_eq!(create_fallback_query("the and of"), "movie");
        assert_eq!(create_fallback_query(""), "movie");
        assert_eq!(
            create_fallback_query("so angry, so sad"),
            create_fallback_query("so angry, so sad")
        );
    }

    #[test]
    fn test_prepare_search_query() {
        assert_eq!(prepare_search_query("dancing queen"), "dancing queen movie");
        assert_eq!(prepare_search_query(""), "movie");

        let huge_word = "z".repeat(120);
        let query = prepare_search_query(&huge_word);
        assert!(validate_query_length(&query).is_valid);
        assert_eq!(query, "movie");
    }
}
