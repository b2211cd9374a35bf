use crate::models::question::{Level, QuestionItem, Track};
use crate::models::score::{DomainFeedback, ScoredItem};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_count() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionRequest {
    pub track: Track,
    #[serde(default)]
    pub level: Level,
    #[serde(default = "default_count")]
    #[validate(range(min = 1, message = "count must be at least 1"))]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub items: Vec<QuestionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerItem {
    pub id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScoreRequest {
    pub track: Track,
    pub answers: Vec<AnswerItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub overall_score: i32,
    pub items: Vec<ScoredItem>,
    pub domain_feedback: DomainFeedback,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdaptiveRequest {
    pub track: Track,
    pub last_score: i32,
    #[serde(default)]
    pub last_level: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveResponse {
    pub next_level: Level,
    pub item: QuestionItem,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VoiceRequest {
    pub transcript: String,
}
