pub mod health;

use axum::{routing::get, Router};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate profile API
        .route("/api/v1/candidates/:id", get(handlers::handle_get_profile))
        .route(
            "/api/v1/candidates/:id/skills",
            get(handlers::handle_filter_skills),
        )
        .route(
            "/api/v1/candidates/:id/markdown",
            get(handlers::handle_profile_markdown),
        )
        .with_state(state)
}
