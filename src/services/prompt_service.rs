//! Prompt templates for every model-backed operation.
//!
//! Each template spells out the literal JSON shape expected back and asks for
//! pure JSON. Replies are still treated as untrusted by the reconcilers.

use crate::dto::assessment_dto::AnswerItem;
use crate::models::question::{CompetencyDomain, Level, Track};
use crate::utils::template::fill_template;

const GENERATE_TEMPLATE: &str = r#"
You are an AI-based question generator for assessing high school students' {track} readiness.
Generate {count} multiple-choice questions across EASY, MEDIUM, and HARD difficulties
to simulate adaptive testing. Each question must have:
- id (string)
- question (clear and concise)
- 4 options (A, B, C, D)
- correct answer key (A|B|C|D)
- competency_domain (logic, creativity, interpersonal, practical, or strategy)
- level (easy, medium, or hard)

Return STRICT JSON ONLY, in this exact structure:
{
  "items": [
    {
      "id": "string",
      "question": "string",
      "options": [
        {"key":"A","text":"..."},
        {"key":"B","text":"..."},
        {"key":"C","text":"..."},
        {"key":"D","text":"..."}
      ],
      "answer": "A|B|C|D",
      "competency_domain": "logic|creativity|interpersonal|practical|strategy",
      "level": "easy|medium|hard"
    }
  ]
}

Rules:
- Output pure JSON (no commentary, no markdown, no explanation).
- Questions should mix cognitive and situational reasoning relevant to the chosen track.
- Maintain balance across domains.
"#;

const ADAPTIVE_TEMPLATE: &str = r#"
You are an adaptive question generator for high school students' {track} readiness.
Generate ONE multiple-choice question at {level} difficulty.
Return STRICT JSON ONLY:
{
  "id": "string",
  "question": "string",
  "options": [
    {"key":"A","text":"..."},
    {"key":"B","text":"..."},
    {"key":"C","text":"..."},
    {"key":"D","text":"..."}
  ],
  "answer": "A|B|C|D",
  "competency_domain": "logic|creativity|interpersonal|practical|strategy",
  "level": "{level}"
}
DO NOT include any commentary or markdown.
"#;

const SCORE_TEMPLATE: &str = r#"
You are an educational assessor evaluating high school students' {track} readiness.
Given a list of question-answer pairs with correct answers and domains,
analyze each answer and provide:
- score: integer 0-100 (accuracy or reasoning quality)
- feedback: short constructive feedback
Return JSON ONLY (no commentary, no markdown):
{
  "items": [
    {
      "id": "string",
      "score": int,
      "feedback": "string",
      "domain": "logic|creativity|interpersonal|practical|strategy"
    }
  ],
  "domain_feedback": {
    "logic": "string",
    "creativity": "string",
    "interpersonal": "string",
    "practical": "string",
    "strategy": "string"
  },
  "overall_score": int
}
Text:
{answers}
"#;

const DOMAIN_FEEDBACK_TEMPLATE: &str = r#"
Provide 1-2 sentences of feedback per domain based on these scores:
{scores}
Return JSON ONLY (no commentary, no markdown):
{
  "logic": "string",
  "creativity": "string",
  "interpersonal": "string",
  "practical": "string",
  "strategy": "string"
}
"#;

const VOICE_TEMPLATE: &str = r#"
You are an AI evaluator analyzing a student's voice reflection.
Evaluate the following transcript and respond in STRICT JSON format (no commentary, no markdown):

{
  "confidence": number (0-100),
  "positivity": number (0-100),
  "empathy": number (0-100),
  "summary": "a concise paragraph summarizing tone, clarity, and coherence"
}

Transcript:
{transcript}
"#;

pub fn generate_prompt(track: Track, count: usize) -> String {
    fill_template(
        GENERATE_TEMPLATE,
        &[("track", track.as_str()), ("count", &count.to_string())],
    )
}

pub fn adaptive_prompt(track: Track, level: Level) -> String {
    fill_template(
        ADAPTIVE_TEMPLATE,
        &[("track", track.as_str()), ("level", level.as_str())],
    )
}

/// Answers are rendered one per line as `id: answer`.
pub fn score_prompt(track: Track, answers: &[AnswerItem]) -> String {
    let lines = answers
        .iter()
        .map(|a| format!("{}: {}", a.id, a.answer))
        .collect::<Vec<_>>()
        .join("\n");
    fill_template(
        SCORE_TEMPLATE,
        &[("track", track.as_str()), ("answers", &lines)],
    )
}

pub fn domain_feedback_prompt(averages: &[(CompetencyDomain, i32)]) -> String {
    let scores = averages
        .iter()
        .map(|(d, avg)| format!("\"{}\": {}", d, avg))
        .collect::<Vec<_>>()
        .join(", ");
    fill_template(
        DOMAIN_FEEDBACK_TEMPLATE,
        &[("scores", &format!("{{{}}}", scores))],
    )
}

pub fn voice_prompt(transcript: &str) -> String {
    // Substituted last so transcript text cannot inject other placeholders.
    fill_template(VOICE_TEMPLATE, &[("transcript", transcript)])
}
