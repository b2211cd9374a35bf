use serde::Deserialize;
use validator::Validate;

fn default_consistency() -> i32 {
    50
}

/// Behavioral telemetry; `response_times` are seconds per answer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BehaviorRequest {
    #[serde(default)]
    pub response_times: Vec<f64>,
    #[serde(default = "default_consistency")]
    pub consistency_score: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "interruptions cannot be negative"))]
    pub interruptions: i32,
}
