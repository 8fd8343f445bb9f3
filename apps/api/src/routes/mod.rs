pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::builder::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume",
            get(handlers::handle_get_resume).delete(handlers::handle_clear),
        )
        .route(
            "/api/v1/resume/personal-info",
            put(handlers::handle_set_personal_info),
        )
        .route(
            "/api/v1/resume/education",
            post(handlers::handle_add_education),
        )
        .route(
            "/api/v1/resume/experience",
            post(handlers::handle_add_experience),
        )
        .route("/api/v1/resume/skills", post(handlers::handle_add_skill))
        .route("/api/v1/resume/preview", get(handlers::handle_preview))
        .route("/api/v1/resume/analysis", get(handlers::handle_analyze))
        .route(
            "/api/v1/resume/export/text",
            post(handlers::handle_export_text),
        )
        .route(
            "/api/v1/resume/export/json",
            post(handlers::handle_export_json),
        )
        .with_state(state)
}
