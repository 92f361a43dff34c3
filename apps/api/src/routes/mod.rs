pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/match/requirements",
            post(handlers::handle_requirements),
        )
        .with_state(state)
}
