//! Public types for the query optimizer API
use serde::{Deserialize, Serialize};

use crate::query::QueryValidation;

#[derive(Deserialize)]
pub struct OptimizeParams {
    pub text: String,
    // Anchor the query with "movie"
    #[serde(default = "default_context")]
    pub context: bool,
}

fn default_context() -> bool {
    true
}

#[derive(Serialize)]
pub struct OptimizeResponse {
    pub query: String,
    pub validation: QueryValidation,
    pub fallback: String,
}
