//! Best-effort JSON recovery from free-form model output.
//!
//! Model replies routinely wrap the payload in commentary or markdown fences.
//! Everything returned here is structurally untrusted; callers reconcile it.

use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;

fn json_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first `{` to last `}`, else first `[` to last `]`.
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}|\[.*\]").expect("static JSON span regex"))
}

fn parse_span(text: &str) -> Option<JsonValue> {
    match json_span().find(text) {
        Some(m) => serde_json::from_str(m.as_str())
            .ok()
            // A quoted payload has escaped braces inside; the whole text may still parse.
            .or_else(|| serde_json::from_str(text.trim()).ok()),
        None => serde_json::from_str(text.trim()).ok(),
    }
}

/// Extracts and parses the first plausible JSON value in `text`, returning
/// `fallback` when nothing parses. A double-encoded payload (a JSON string
/// holding JSON) is unwrapped once.
pub fn safe_json_parse(text: Option<&str>, fallback: JsonValue) -> JsonValue {
    let Some(text) = text else {
        return fallback;
    };

    match parse_span(text) {
        Some(JsonValue::String(inner)) => match parse_span(&inner) {
            Some(JsonValue::String(_)) | None => fallback,
            Some(value) => value,
        },
        Some(value) => value,
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_text_returns_fallback() {
        assert_eq!(safe_json_parse(None, json!({"items": []})), json!({"items": []}));
    }

    #[test]
    fn extracts_object_surrounded_by_commentary() {
        let text = "Sure! Here you go:\n```json\n{\"items\": [{\"id\": \"q1\"}]}\n```\nHope it helps.";
        assert_eq!(
            safe_json_parse(Some(text), json!({})),
            json!({"items": [{"id": "q1"}]})
        );
    }

    #[test]
    fn extracts_bare_array() {
        let text = "result: [1, 2, 3] done";
        assert_eq!(safe_json_parse(Some(text), json!(null)), json!([1, 2, 3]));
    }

    #[test]
    fn greedy_span_covers_nested_objects() {
        let text = "{\"a\": {\"b\": 1}, \"c\": [ {\"d\": 2} ]}";
        assert_eq!(
            safe_json_parse(Some(text), json!({})),
            json!({"a": {"b": 1}, "c": [{"d": 2}]})
        );
    }

    #[test]
    fn malformed_json_returns_fallback() {
        let text = "{\"items\": [ {\"id\": \"q1\", } ";
        assert_eq!(safe_json_parse(Some(text), json!({"fb": true})), json!({"fb": true}));
    }

    #[test]
    fn plain_prose_returns_fallback() {
        assert_eq!(
            safe_json_parse(Some("I cannot help with that."), json!({})),
            json!({})
        );
        assert_eq!(safe_json_parse(Some(""), json!([])), json!([]));
    }

    #[test]
    fn two_separate_objects_do_not_parse() {
        // The greedy span joins both objects into invalid JSON.
        let text = "first {\"a\": 1} then {\"b\": 2}";
        assert_eq!(safe_json_parse(Some(text), json!("fallback")), json!("fallback"));
    }

    #[test]
    fn double_encoded_payload_is_unwrapped_once() {
        let inner = json!({"confidence": 80}).to_string();
        let text = serde_json::to_string(&inner).unwrap();
        assert_eq!(safe_json_parse(Some(&text), json!({})), json!({"confidence": 80}));
    }

    #[test]
    fn string_without_json_inside_returns_fallback() {
        assert_eq!(safe_json_parse(Some("\"just words\""), json!({})), json!({}));
    }
}
