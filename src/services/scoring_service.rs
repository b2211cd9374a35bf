//! Two-phase answer scoring.
//!
//! Phase one asks the model to score each answer and aggregates per-domain
//! averages. Phase two asks it to narrate those averages. A failed or
//! unparseable phase two only degrades the narrative to canned text.

use crate::dto::assessment_dto::{AnswerItem, ScoreRequest, ScoreResponse};
use crate::error::Result;
use crate::models::question::CompetencyDomain;
use crate::models::reconcile::{collect_valid, Reconciled};
use crate::models::score::{DomainFeedback, DomainScores, ScoredItem};
use crate::services::llm_service::LlmClient;
use crate::services::prompt_service;
use crate::utils::coerce::{clamp_percent, coerce_int, coerce_text};
use crate::utils::json_extract::safe_json_parse;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

pub const DEFAULT_ITEM_SCORE: i32 = 60;
const DEFAULT_ITEM_FEEDBACK: &str = "Good effort; keep improving.";
const FALLBACK_ITEM_FEEDBACK: &str = "Consistent reasoning but could be deeper.";

#[derive(Clone)]
pub struct ScoringService {
    llm: Arc<dyn LlmClient>,
}

impl ScoringService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn score(&self, req: &ScoreRequest) -> Result<ScoreResponse> {
        let prompt = prompt_service::score_prompt(req.track, &req.answers);
        tracing::info!(track = %req.track, answers = req.answers.len(), "Scoring answers");

        let raw = self.llm.generate_content(&prompt).await?;
        let data = safe_json_parse(Some(raw.as_str()), json!({}));

        let mut items = reconcile_scored_items(&data);
        if items.is_empty() && !req.answers.is_empty() {
            tracing::warn!(
                answers = req.answers.len(),
                "No scored items recovered, using deterministic fallback scores"
            );
            items = fallback_scores(&req.answers);
        }

        let mut domain_scores = DomainScores::default();
        for item in &items {
            if let Some(domain) = item.domain {
                domain_scores.record(domain, item.score);
            }
        }
        let averages = domain_scores.averages();
        let overall_score = DomainScores::overall(&averages);

        let domain_feedback = self.narrate(&averages).await;

        Ok(ScoreResponse {
            overall_score,
            items,
            domain_feedback,
        })
    }

    async fn narrate(&self, averages: &[(CompetencyDomain, i32)]) -> DomainFeedback {
        let prompt = prompt_service::domain_feedback_prompt(averages);
        let data = match self.llm.generate_content(&prompt).await {
            Ok(raw) => safe_json_parse(Some(raw.as_str()), json!({})),
            Err(e) => {
                tracing::warn!(error = %e, "Domain feedback call failed, using canned feedback");
                json!({})
            }
        };
        reconcile_domain_feedback(&data)
    }
}

/// Phase-one items. Non-object entries are dropped; every field of a usable
/// entry defaults independently.
pub fn reconcile_scored_items(data: &JsonValue) -> Vec<ScoredItem> {
    let entries: &[JsonValue] = match data.get("items") {
        Some(JsonValue::Array(items)) => items,
        _ => &[],
    };

    let reconciled = entries
        .iter()
        .enumerate()
        .map(|(idx, raw)| Reconciled::from_result(idx, reconcile_scored_item(raw)));
    collect_valid(reconciled, "scored item")
}

fn reconcile_scored_item(raw: &JsonValue) -> std::result::Result<ScoredItem, String> {
    let obj = raw
        .as_object()
        .ok_or_else(|| "scored item is not a JSON object".to_string())?;

    let score = clamp_percent(coerce_int(obj.get("score"), DEFAULT_ITEM_SCORE));
    // Missing domain means logic; an unrecognised one is kept out of the averages.
    let domain = match obj.get("domain").and_then(|d| d.as_str()) {
        Some(s) => s.parse::<CompetencyDomain>().ok(),
        None => Some(CompetencyDomain::Logic),
    };

    Ok(ScoredItem {
        id: coerce_text(obj.get("id")).unwrap_or_else(|| "unknown".to_string()),
        score,
        feedback: coerce_text(obj.get("feedback"))
            .unwrap_or_else(|| DEFAULT_ITEM_FEEDBACK.to_string()),
        domain,
    })
}

/// One deterministic score per answer, cycling domains in their fixed order.
pub fn fallback_scores(answers: &[AnswerItem]) -> Vec<ScoredItem> {
    answers
        .iter()
        .enumerate()
        .map(|(i, a)| ScoredItem {
            id: a.id.clone(),
            score: DEFAULT_ITEM_SCORE + ((i * 5) % 40) as i32,
            feedback: FALLBACK_ITEM_FEEDBACK.to_string(),
            domain: Some(CompetencyDomain::ALL[i % CompetencyDomain::ALL.len()]),
        })
        .collect()
}

pub fn canned_feedback(domain: CompetencyDomain) -> &'static str {
    match domain {
        CompetencyDomain::Logic => "You demonstrated solid reasoning.",
        CompetencyDomain::Creativity => "You showed some creative potential.",
        CompetencyDomain::Interpersonal => "Good teamwork and communication.",
        CompetencyDomain::Practical => "Strong practical problem-solving.",
        CompetencyDomain::Strategy => "Effective planning and adaptability.",
    }
}

pub fn reconcile_domain_feedback(data: &JsonValue) -> DomainFeedback {
    let mut feedback = DomainFeedback::default();
    for domain in CompetencyDomain::ALL {
        let text = data
            .get(domain.as_str())
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| canned_feedback(domain).to_string());
        feedback.set(domain, text);
    }
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::question::Track;
    use crate::services::llm_service::MockLlmClient;
    use mockall::Sequence;

    fn answers(n: usize) -> Vec<AnswerItem> {
        (0..n)
            .map(|i| AnswerItem {
                id: format!("q_{}", i),
                answer: "B".to_string(),
            })
            .collect()
    }

    #[test]
    fn scored_items_default_field_by_field() {
        let data = json!({"items": [
            {"id": "q1", "score": "88", "domain": "creativity", "feedback": "Nice"},
            {"id": "q2"},
            {"id": "q3", "score": "n/a", "domain": "music"},
            "garbage",
            {"score": 140.7, "domain": "STRATEGY"}
        ]});
        let items = reconcile_scored_items(&data);
        assert_eq!(items.len(), 4);

        assert_eq!(items[0].score, 88);
        assert_eq!(items[0].domain, Some(CompetencyDomain::Creativity));

        assert_eq!(items[1].score, 60);
        assert_eq!(items[1].domain, Some(CompetencyDomain::Logic));
        assert_eq!(items[1].feedback, "Good effort; keep improving.");

        assert_eq!(items[2].score, 60);
        assert_eq!(items[2].domain, None);

        assert_eq!(items[3].id, "unknown");
        assert_eq!(items[3].score, 100);
        assert_eq!(items[3].domain, Some(CompetencyDomain::Strategy));
    }

    #[test]
    fn fallback_cycles_domains_and_scores() {
        let items = fallback_scores(&answers(12));
        assert_eq!(items.len(), 12);
        let domains: Vec<_> = items.iter().map(|i| i.domain.unwrap()).collect();
        assert_eq!(&domains[..5], &CompetencyDomain::ALL[..]);
        assert_eq!(domains[5], CompetencyDomain::Logic);
        let scores: Vec<_> = items.iter().map(|i| i.score).collect();
        assert_eq!(scores, vec![60, 65, 70, 75, 80, 85, 90, 95, 60, 65, 70, 75]);
        assert!(items.iter().all(|i| i.feedback == FALLBACK_ITEM_FEEDBACK));
        assert_eq!(items[3].id, "q_3");
    }

    #[test]
    fn domain_feedback_falls_back_per_field() {
        let fb = reconcile_domain_feedback(&json!({"logic": "Sharp.", "creativity": "", "practical": 3}));
        assert_eq!(fb.logic.as_deref(), Some("Sharp."));
        assert_eq!(fb.creativity.as_deref(), Some("You showed some creative potential."));
        assert_eq!(fb.practical.as_deref(), Some("Strong practical problem-solving."));
        assert_eq!(fb.get(CompetencyDomain::Strategy), Some("Effective planning and adaptability."));
    }

    #[tokio::test]
    async fn unparseable_reply_uses_fallback_and_canned_feedback() {
        let mut llm = MockLlmClient::new();
        let mut seq = Sequence::new();
        llm.expect_generate_content()
            .withf(|p: &str| p.contains("q_0: B"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("The answers look fine overall.".to_string()));
        llm.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("not json".to_string()));

        let service = ScoringService::new(Arc::new(llm));
        let req = ScoreRequest {
            track: Track::Academic,
            answers: answers(3),
        };
        let resp = service.score(&req).await.unwrap();

        assert_eq!(resp.items.len(), 3);
        // logic 60, creativity 65, interpersonal 70, others 0
        assert_eq!(resp.overall_score, (60 + 65 + 70) / 5);
        assert_eq!(
            resp.domain_feedback.logic.as_deref(),
            Some("You demonstrated solid reasoning.")
        );
    }

    #[tokio::test]
    async fn narrative_failure_keeps_phase_one_scores() {
        let mut llm = MockLlmClient::new();
        let mut seq = Sequence::new();
        llm.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({"items": [
                    {"id": "q_0", "score": 90, "domain": "logic", "feedback": "Great"},
                    {"id": "q_1", "score": 71, "domain": "logic", "feedback": "Ok"},
                    {"id": "q_2", "score": 40, "domain": "practical", "feedback": "Hmm"}
                ]})
                .to_string())
            });
        llm.expect_generate_content()
            .withf(|p: &str| p.contains("\"logic\": 80") && p.contains("\"practical\": 40"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(Error::Upstream("timeout".into())));

        let service = ScoringService::new(Arc::new(llm));
        let req = ScoreRequest {
            track: Track::Career,
            answers: answers(3),
        };
        let resp = service.score(&req).await.unwrap();

        assert_eq!(resp.items.len(), 3);
        assert_eq!(resp.items[0].feedback, "Great");
        // logic avg 80 (truncated from 80.5), practical 40
        assert_eq!(resp.overall_score, (80 + 40) / 5);
        assert_eq!(
            resp.domain_feedback.strategy.as_deref(),
            Some("Effective planning and adaptability.")
        );
    }

    #[tokio::test]
    async fn narrative_reply_is_used_when_parseable() {
        let mut llm = MockLlmClient::new();
        let mut seq = Sequence::new();
        llm.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!({"items": [{"id": "q_0", "score": 75}]}).to_string()));
        llm.expect_generate_content()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("```json\n{\"logic\": \"Clear logical steps.\"}\n```".to_string()));

        let service = ScoringService::new(Arc::new(llm));
        let req = ScoreRequest {
            track: Track::Career,
            answers: answers(1),
        };
        let resp = service.score(&req).await.unwrap();
        assert_eq!(resp.overall_score, 15);
        assert_eq!(resp.domain_feedback.logic.as_deref(), Some("Clear logical steps."));
        assert_eq!(
            resp.domain_feedback.interpersonal.as_deref(),
            Some("Good teamwork and communication.")
        );
    }

    #[tokio::test]
    async fn no_answers_and_no_items_give_empty_zero_result() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_content()
            .times(2)
            .returning(|_| Ok(String::new()));

        let service = ScoringService::new(Arc::new(llm));
        let req = ScoreRequest {
            track: Track::Career,
            answers: vec![],
        };
        let resp = service.score(&req).await.unwrap();
        assert!(resp.items.is_empty());
        assert_eq!(resp.overall_score, 0);
    }

    #[tokio::test]
    async fn phase_one_upstream_failure_propagates() {
        let mut llm = MockLlmClient::new();
        llm.expect_generate_content()
            .times(1)
            .returning(|_| Err(Error::Upstream("down".into())));

        let service = ScoringService::new(Arc::new(llm));
        let req = ScoreRequest {
            track: Track::Career,
            answers: answers(2),
        };
        assert!(matches!(service.score(&req).await, Err(Error::Upstream(_))));
    }
}
