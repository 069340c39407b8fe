//! Router for inspecting how text is turned into a clip search query

use std::sync::{Arc, RwLock};

use axum::{Router, response::Json, routing::get};
use axum_extra::extract::Query;

use super::public;
use crate::api::state::AppState;
use crate::query::{create_fallback_query, optimize_query, validate_query_length};

type SharedState = Arc<RwLock<AppState>>;

async fn optimize(Query(params): Query<public::OptimizeParams>) -> Json<public::OptimizeResponse> {
    let query = optimize_query(&params.text, params.context);
    let validation = validate_query_length(&query);
    Json(public::OptimizeResponse {
        fallback: create_fallback_query(&params.text),
        query,
        validation,
    })
}

/// Create the query router
pub fn router() -> Router<SharedState> {
    Router::new().route("/optimize", get(optimize))
}
