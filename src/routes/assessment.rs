use crate::{
    dto::assessment_dto::{
        AdaptiveRequest, QuestionRequest, QuestionResponse, ScoreRequest, VoiceRequest,
    },
    error::Result,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

#[axum::debug_handler]
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let items = state.question_service.generate(&payload).await?;
    Ok(Json(QuestionResponse { items }))
}

#[axum::debug_handler]
pub async fn score_answers(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let response = state.scoring_service.score(&payload).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn adaptive_next(
    State(state): State<AppState>,
    Json(payload): Json<AdaptiveRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let response = state.question_service.next_adaptive(&payload).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn voice_evaluate(
    State(state): State<AppState>,
    Json(payload): Json<VoiceRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let evaluation = state.voice_service.evaluate(&payload.transcript).await?;
    Ok(Json(evaluation))
}
