//! Router for the clips API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, response::Json, routing::get};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::query::prepare_search_query;

type SharedState = Arc<RwLock<AppState>>;

async fn clip_search(
    State(state): State<SharedState>,
    Query(params): Query<public::ClipSearchParams>,
) -> Result<Json<public::ClipSearchResponse>, ApiError> {
    let giphy = state
        .read()
        .expect("Unable to read share state")
        .giphy
        .clone();
    let optimized_query = prepare_search_query(&params.query);
    let clips = giphy.search_clips(&optimized_query, params.limit).await?;

    Ok(Json(public::ClipSearchResponse {
        optimized_query,
        query: params.query,
        clips,
    }))
}

async fn clip_trending(
    State(state): State<SharedState>,
    Query(params): Query<public::TrendingParams>,
) -> Result<Json<public::TrendingResponse>, ApiError> {
    let giphy = state
        .read()
        .expect("Unable to read share state")
        .giphy
        .clone();
    let clips = giphy.trending_film_clips(params.limit).await?;
    Ok(Json(public::TrendingResponse { clips }))
}

/// Create the clips router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/search", get(clip_search))
        .route("/trending", get(clip_trending))
}
