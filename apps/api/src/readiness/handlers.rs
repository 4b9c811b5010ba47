use axum::{extract::State, Json};

use crate::readiness::{
    aggregate, evaluate, rank_suggestions, AggregateResult, CandidateProfile, ComponentScores,
    ReadinessReport, SuggestionReport,
};
use crate::state::AppState;

/// POST /api/score/final
pub async fn handle_final_score(Json(scores): Json<ComponentScores>) -> Json<AggregateResult> {
    Json(aggregate(&scores))
}

/// POST /api/suggestions
pub async fn handle_suggestions(Json(scores): Json<ComponentScores>) -> Json<SuggestionReport> {
    Json(rank_suggestions(&scores))
}

/// POST /api/score/calculate
pub async fn handle_calculate(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Json<ReadinessReport> {
    Json(evaluate(&state.catalogs, &profile))
}
