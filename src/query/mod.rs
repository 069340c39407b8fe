//! Turns chat messages and model generated keywords into short
//! queries for the clip search API.
mod lexicon;
mod optimizer;

pub use lexicon::is_stop_word;
pub use optimizer::{
    Category, MAX_QUERY_LENGTH, MIN_QUERY_LENGTH, QueryValidation, ScoredKeyword,
    create_fallback_query, normalize, optimize_query, prepare_search_query, score_keywords,
    validate_query_length,
};
