use serde::{Deserialize, Serialize};

/// Five-dimension competency profile fed to career matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    pub logic: i32,
    pub creativity: i32,
    pub interpersonal: i32,
    pub practical: i32,
    pub strategy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub major: String,
    pub career: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorMetrics {
    pub attention_score: i32,
    pub processing_speed: i32,
    pub consistency: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceEvaluation {
    pub confidence: i32,
    pub positivity: i32,
    pub empathy: i32,
    pub summary: String,
}
