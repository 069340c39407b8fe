//! Public types for the clips API
use serde::{Deserialize, Serialize};

use crate::giphy::GiphyClip;

#[derive(Deserialize)]
pub struct ClipSearchParams {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

fn default_search_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize)]
pub struct ClipSearchResponse {
    pub query: String,
    pub optimized_query: String,
    pub clips: Vec<GiphyClip>,
}

#[derive(Deserialize)]
pub struct TrendingParams {
    #[serde(default = "default_search_limit")]
    pub limit: usize,
}

#[derive(Serialize, Deserialize)]
pub struct TrendingResponse {
    pub clips: Vec<GiphyClip>,
}
