//! Static word lists used to classify search keywords. These are
//! built once on first use and shared read-only for the lifetime of
//! the process.
use std::collections::HashSet;
use std::sync::LazyLock;

static EMOTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "happy", "sad", "angry", "excited", "nervous", "confused", "surprised",
        "disappointed", "frustrated", "anxious", "worried", "scared", "afraid",
        "love", "hate", "joy", "fear", "anger", "disgust", "contempt", "pride",
        "shame", "guilt", "envy", "jealousy", "hope", "despair", "relief",
        "betrayal", "trust", "doubt", "confidence", "insecurity", "loneliness",
        "isolation", "connection", "belonging", "rejection", "acceptance",
        "crisis", "panic", "calm", "peace", "chaos", "stress", "tension",
    ]
    .into_iter()
    .collect()
});

static ACTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "running", "walking", "jumping", "dancing", "fighting", "crying",
        "laughing", "screaming", "whispering", "talking", "singing", "eating",
        "drinking", "sleeping", "working", "playing", "studying", "reading",
        "writing", "driving", "flying", "falling", "climbing", "swimming",
        "cooking", "cleaning", "shopping", "traveling", "meeting", "leaving",
        "arriving", "waiting", "searching", "finding", "losing", "winning",
        "failing", "succeeding", "trying", "giving", "taking", "helping",
        "hurting", "healing", "breaking", "fixing", "building", "destroying",
        "creating", "discovering", "exploring", "hiding", "revealing",
        "escaping", "chasing", "catching", "throwing",
    ]
    .into_iter()
    .collect()
});

static FILM_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "movie", "film", "cinema", "scene", "actor", "actress", "director",
        "character", "plot", "story", "drama", "comedy", "action", "thriller",
        "horror", "romance", "adventure", "fantasy", "scifi", "documentary",
        "animation", "musical", "western", "noir", "indie", "blockbuster",
    ]
    .into_iter()
    .collect()
});

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "up", "about", "into", "through", "during",
        "before", "after", "above", "below", "between", "among", "under", "over",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might",
        "must", "can", "this", "that", "these", "those", "i", "you", "he", "she",
        "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his",
        "its", "our", "their", "myself", "yourself", "himself", "herself",
        "itself", "ourselves", "yourselves", "themselves",
    ]
    .into_iter()
    .collect()
});

/// Suffixes that mark a word as descriptive when it isn't in any of
/// the word lists.
const DESCRIPTIVE_SUFFIXES: [&str; 3] = ["ing", "ed", "ly"];

pub fn is_emotion_word(word: &str) -> bool {
    EMOTION_WORDS.contains(word)
}

pub fn is_action_word(word: &str) -> bool {
    ACTION_WORDS.contains(word)
}

pub fn is_film_word(word: &str) -> bool {
    FILM_WORDS.contains(word)
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn has_descriptive_suffix(word: &str) -> bool {
    DESCRIPTIVE_SUFFIXES
        .iter()
        .any(|suffix| word.ends_with(suffix))
}
