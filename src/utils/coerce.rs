use serde_json::Value as JsonValue;

/// Reads an integer from loosely typed model output. Floats truncate toward
/// zero and numeric strings are accepted; anything else yields `default`.
pub fn coerce_int(value: Option<&JsonValue>, default: i32) -> i32 {
    let parsed = match value {
        Some(JsonValue::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(JsonValue::String(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    };
    parsed
        .map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
        .unwrap_or(default)
}

/// Non-empty string field, or `None`. Numbers are rendered as text.
pub fn coerce_text(value: Option<&JsonValue>) -> Option<String> {
    match value {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(JsonValue::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

pub fn clamp_percent(v: i32) -> i32 {
    v.clamp(0, 100)
}
