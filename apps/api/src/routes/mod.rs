pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::readiness::handlers as readiness;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Reference catalogs
        .route("/api/skills", get(scoring::handle_list_skills))
        .route(
            "/api/certifications",
            get(scoring::handle_list_certifications),
        )
        // Component scoring
        .route("/api/score/skills", post(scoring::handle_score_skills))
        .route(
            "/api/score/certifications",
            post(scoring::handle_score_certifications),
        )
        .route(
            "/api/score/certifications/scan",
            post(scoring::handle_scan_certificate),
        )
        .route("/api/score/projects", post(scoring::handle_score_projects))
        .route(
            "/api/score/internships",
            post(scoring::handle_score_internships),
        )
        .route("/api/score/resume", post(scoring::handle_score_resume_file))
        .route(
            "/api/score/resume-text",
            post(scoring::handle_score_resume_text),
        )
        // Readiness
        .route("/api/score/final", post(readiness::handle_final_score))
        .route("/api/suggestions", post(readiness::handle_suggestions))
        .route("/api/score/calculate", post(readiness::handle_calculate))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
