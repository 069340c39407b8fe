//! API routes module

pub mod chat;
pub mod clips;
pub mod query;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat and history routes
        .nest("/chat", chat::router())
        // Clip search routes
        .nest("/clips", clips::router())
        // Query optimizer routes
        .nest("/query", query::router())
}
