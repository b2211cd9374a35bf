use crate::error::Result;
use crate::models::profile::VoiceEvaluation;
use crate::services::llm_service::LlmClient;
use crate::services::prompt_service;
use crate::utils::coerce::{clamp_percent, coerce_int, coerce_text};
use crate::utils::json_extract::safe_json_parse;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

const DEFAULT_METRIC: i32 = 60;
const DEFAULT_SUMMARY: &str = "Initial evaluation based on provided transcript.";

#[derive(Clone)]
pub struct VoiceService {
    llm: Arc<dyn LlmClient>,
}

impl VoiceService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn evaluate(&self, transcript: &str) -> Result<VoiceEvaluation> {
        tracing::info!(transcript_bytes = transcript.len(), "Evaluating voice transcript");
        let prompt = prompt_service::voice_prompt(transcript);
        let raw = self.llm.generate_content(&prompt).await?;
        let data = safe_json_parse(Some(raw.as_str()), json!({}));
        Ok(reconcile_voice(&data))
    }
}

/// Each field defaults on its own, independent of the others.
pub fn reconcile_voice(data: &JsonValue) -> VoiceEvaluation {
    let metric = |name: &str| clamp_percent(coerce_int(data.get(name), DEFAULT_METRIC));
    VoiceEvaluation {
        confidence: metric("confidence"),
        positivity: metric("positivity"),
        empathy: metric("empathy"),
        summary: coerce_text(data.get("summary")).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
    }
}
