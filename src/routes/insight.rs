use crate::{
    dto::insight_dto::BehaviorRequest,
    error::Result,
    models::profile::AssessmentProfile,
    services::{behavior_service, career_service},
};
use axum::{response::IntoResponse, Json};
use validator::Validate;

#[axum::debug_handler]
pub async fn behavior_analyze(Json(payload): Json<BehaviorRequest>) -> Result<impl IntoResponse> {
    payload.validate()?;
    Ok(Json(behavior_service::analyze(&payload)))
}

#[axum::debug_handler]
pub async fn career_match(Json(profile): Json<AssessmentProfile>) -> impl IntoResponse {
    Json(career_service::match_career(&profile))
}
