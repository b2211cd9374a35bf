use crate::dto::assessment_dto::{AdaptiveRequest, AdaptiveResponse, QuestionRequest};
use crate::error::{Error, Result};
use crate::models::question::{CompetencyDomain, Level, McqOption, OptionKey, QuestionItem};
use crate::models::reconcile::{collect_valid, Reconciled};
use crate::services::adaptive_service::next_level;
use crate::services::llm_service::LlmClient;
use crate::services::prompt_service;
use crate::utils::coerce::coerce_text;
use crate::utils::id::gen_id;
use crate::utils::json_extract::safe_json_parse;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Batches at least this large get a mixed difficulty fallback.
pub const MIXED_LEVEL_THRESHOLD: usize = 10;
const LEVEL_WEIGHTS: [u32; 3] = [30, 40, 30];

#[derive(Clone)]
pub struct QuestionService {
    llm: Arc<dyn LlmClient>,
    max_questions: usize,
}

impl QuestionService {
    pub fn new(llm: Arc<dyn LlmClient>, max_questions: usize) -> Self {
        Self {
            llm,
            max_questions: max_questions.max(1),
        }
    }

    pub async fn generate(&self, req: &QuestionRequest) -> Result<Vec<QuestionItem>> {
        let count = req.count.clamp(1, self.max_questions);
        let prompt = prompt_service::generate_prompt(req.track, count);
        tracing::info!(track = %req.track, count, "Requesting question batch");

        let raw = self.llm.generate_content(&prompt).await?;
        let data = safe_json_parse(Some(raw.trim()), json!({ "items": [] }));

        let mut rng = rand::thread_rng();
        let levels = level_mix(count, req.level, &mut rng);
        let items = reconcile_batch(&data, &levels, count, &mut rng)?;
        tracing::info!(requested = count, returned = items.len(), "Question batch reconciled");
        Ok(items)
    }

    pub async fn next_adaptive(&self, req: &AdaptiveRequest) -> Result<AdaptiveResponse> {
        let level = next_level(req.last_score, req.last_level);
        tracing::info!(
            last_score = req.last_score,
            last_level = %req.last_level,
            next_level = %level,
            "Selecting adaptive item"
        );

        let prompt = prompt_service::adaptive_prompt(req.track, level);
        let raw = self.llm.generate_content(&prompt).await?;
        let data = safe_json_parse(Some(raw.trim()), json!({}));

        let mut rng = rand::thread_rng();
        let mut item = reconcile_item(0, single_candidate(&data), level, &mut rng).map_err(|reason| {
            tracing::warn!(%reason, "Adaptive item could not be reconciled");
            Error::Generation("Failed to parse adaptive question.".to_string())
        })?;
        item.level = level;

        Ok(AdaptiveResponse {
            next_level: level,
            item,
        })
    }
}

/// Per-slot fallback levels: a 30/40/30 easy/medium/hard draw for large
/// batches, otherwise the requested level for every slot.
pub fn level_mix(count: usize, requested: Level, rng: &mut impl Rng) -> Vec<Level> {
    if count >= MIXED_LEVEL_THRESHOLD {
        match WeightedIndex::new(LEVEL_WEIGHTS) {
            Ok(dist) => (0..count).map(|_| Level::ALL[dist.sample(rng)]).collect(),
            Err(_) => vec![requested; count],
        }
    } else {
        vec![requested; count]
    }
}

/// Reconciles `{items: [...]}` into at most `count` shuffled, well-formed items.
/// Fails only when no item survives.
pub fn reconcile_batch(
    data: &JsonValue,
    levels: &[Level],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<QuestionItem>> {
    let candidates: &[JsonValue] = match data.get("items") {
        Some(JsonValue::Array(items)) => items,
        _ => &[],
    };

    let reconciled: Vec<Reconciled<QuestionItem>> = candidates
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let slot_level = if levels.is_empty() {
                Level::default()
            } else {
                levels[idx % levels.len()]
            };
            Reconciled::from_result(idx, reconcile_item(idx, raw, slot_level, rng))
        })
        .collect();

    let mut items = collect_valid(reconciled, "question item");
    if items.is_empty() {
        return Err(Error::Generation("Failed to generate valid items".to_string()));
    }

    items.shuffle(rng);
    items.truncate(count);
    Ok(items)
}

/// The adaptive reply may be a bare item or a one-element batch.
fn single_candidate(data: &JsonValue) -> &JsonValue {
    match data.get("items").and_then(|v| v.as_array()).and_then(|a| a.first()) {
        Some(first) => first,
        None => data,
    }
}

/// Builds one item from untrusted JSON, defaulting every recoverable field.
/// Errors name the reason the entry cannot be used at all.
pub fn reconcile_item(
    index: usize,
    raw: &JsonValue,
    slot_level: Level,
    rng: &mut impl Rng,
) -> std::result::Result<QuestionItem, String> {
    let obj = raw
        .as_object()
        .ok_or_else(|| "item is not a JSON object".to_string())?;

    let options = reconcile_options(obj.get("options"))?;

    let id = coerce_text(obj.get("id")).unwrap_or_else(|| gen_id("q"));
    let question =
        coerce_text(obj.get("question")).unwrap_or_else(|| format!("Question {}?", index + 1));
    let answer = obj
        .get("answer")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<OptionKey>().ok())
        .unwrap_or_else(|| OptionKey::ALL[rng.gen_range(0..OptionKey::ALL.len())]);
    let competency_domain = obj
        .get("competency_domain")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<CompetencyDomain>().ok())
        .unwrap_or_else(|| CompetencyDomain::ALL[rng.gen_range(0..CompetencyDomain::ALL.len())]);
    let level = obj
        .get("level")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(slot_level);

    Ok(QuestionItem {
        id,
        question,
        options,
        answer,
        competency_domain,
        level,
    })
}

/// Accepts a list of `{key, text}` objects or a `{"A": text, ...}` map.
/// Any entry that fails validation rejects the whole item; keys the model
/// left out are filled with placeholders so the result is always A-D.
fn reconcile_options(raw: Option<&JsonValue>) -> std::result::Result<Vec<McqOption>, String> {
    let mut by_key: BTreeMap<OptionKey, String> = BTreeMap::new();

    match raw {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::Array(entries)) => {
            for (pos, entry) in entries.iter().enumerate() {
                let (key, text) = parse_option_entry(entry)
                    .map_err(|e| format!("option {} invalid: {}", pos, e))?;
                by_key.entry(key).or_insert(text);
            }
        }
        Some(JsonValue::Object(map)) => {
            for (k, v) in map {
                let key = k.parse::<OptionKey>()?;
                let text = v
                    .as_str()
                    .ok_or_else(|| format!("option {} text is not a string", key))?;
                by_key.entry(key).or_insert_with(|| text.to_string());
            }
        }
        Some(other) => return Err(format!("options has unexpected shape: {}", other)),
    }

    Ok(OptionKey::ALL
        .into_iter()
        .map(|key| match by_key.remove(&key) {
            Some(text) => McqOption { key, text },
            None => McqOption::placeholder(key),
        })
        .collect())
}

fn parse_option_entry(entry: &JsonValue) -> std::result::Result<(OptionKey, String), String> {
    let obj = entry.as_object().ok_or("not an object")?;
    let key = obj
        .get("key")
        .and_then(|k| k.as_str())
        .ok_or("missing key")?
        .parse::<OptionKey>()?;
    let text = obj
        .get("text")
        .and_then(|t| t.as_str())
        .ok_or("missing text")?;
    Ok((key, text.to_string()))
}
