pub mod assessment;
pub mod health;
pub mod insight;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/generate", post(assessment::generate_questions))
        .route("/score", post(assessment::score_answers))
        .route("/adaptive/next", post(assessment::adaptive_next))
        .route("/voice/evaluate", post(assessment::voice_evaluate))
        .route("/behavior/analyze", post(insight::behavior_analyze))
        .route("/career/match", post(insight::career_match))
        .with_state(state)
}
