pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-resume",
            post(handlers::handle_generate_resume),
        )
        .route("/api/analyze-jd", post(handlers::handle_analyze_jd))
        .route("/api/mock-interview", post(handlers::handle_mock_interview))
        .route("/api/mock-answer", post(handlers::handle_mock_answer))
        .with_state(state)
}
