use crate::dto::insight_dto::BehaviorRequest;
use crate::models::profile::BehaviorMetrics;
use crate::utils::coerce::clamp_percent;

fn clamp_score(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.trunc().clamp(0.0, 100.0) as i32
}

/// Heuristic attention/speed/consistency scores, each in [0, 100].
/// An empty timing list counts as an average of zero seconds.
pub fn analyze(req: &BehaviorRequest) -> BehaviorMetrics {
    let avg_time = if req.response_times.is_empty() {
        0.0
    } else {
        req.response_times.iter().sum::<f64>() / req.response_times.len() as f64
    };

    BehaviorMetrics {
        attention_score: clamp_score(100.0 - avg_time * 10.0 - f64::from(req.interruptions) * 5.0),
        processing_speed: clamp_score(100.0 - avg_time * 15.0),
        consistency: clamp_percent(req.consistency_score),
    }
}
