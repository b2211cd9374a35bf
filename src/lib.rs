pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    llm_service::{GeminiClient, LlmClient},
    question_service::QuestionService,
    scoring_service::ScoringService,
    voice_service::VoiceService,
};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub model_name: String,
    pub question_service: QuestionService,
    pub scoring_service: ScoringService,
    pub voice_service: VoiceService,
}

impl AppState {
    /// Builds the one shared LLM client from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder().build()?;
        let gemini = GeminiClient::from_config(config, http_client);
        Ok(Self::with_llm(
            Arc::new(gemini),
            config.gemini_model.clone(),
            config.max_questions,
        ))
    }

    pub fn with_llm(
        llm: Arc<dyn LlmClient>,
        model_name: impl Into<String>,
        max_questions: usize,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            question_service: QuestionService::new(llm.clone(), max_questions),
            scoring_service: ScoringService::new(llm.clone()),
            voice_service: VoiceService::new(llm),
        }
    }
}
