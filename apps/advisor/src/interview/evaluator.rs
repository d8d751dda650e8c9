//! Interview answer evaluator: keyword presence plus a randomized fluency term.
//!
//! Algorithm:
//! 1. Resolve keywords via `QuestionBank::keywords_for` (exact prompt match, else Default).
//! 2. matches = keywords contained as substrings of the lowercased answer
//! 3. fluency drawn uniformly from [0.70, 0.95]
//! 4. score = clamp(round(40 + 12 × matches + 40 × fluency), 0, 100)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interview::questions::QuestionBank;
use crate::interview::random::RandomSource;

const FLUENCY_MIN: f64 = 0.70;
const FLUENCY_MAX: f64 = 0.95;

const BASE_POINTS: f64 = 40.0;
const POINTS_PER_KEYWORD: f64 = 12.0;
const FLUENCY_POINTS: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: u8, // 0 – 100
    pub feedback: String,
    /// Keywords found in the answer, in question order.
    pub matched_keywords: Vec<String>,
}

/// Scores a free-text answer. Never fails; empty answers score on fluency alone.
pub fn evaluate_answer(
    bank: &QuestionBank,
    role: &str,
    prompt: &str,
    answer: &str,
    rng: &mut dyn RandomSource,
) -> EvaluationResult {
    let answer = answer.to_lowercase();

    let (keywords, exact) = bank.keywords_for(role, prompt);
    if !exact {
        warn!(role, prompt, "no exact question match; using default keywords");
    }

    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|kw| answer.contains(kw.as_str()))
        .cloned()
        .collect();
    let key_matches = matched_keywords.len();

    let fluency = rng.next_in_range(FLUENCY_MIN, FLUENCY_MAX);
    let raw = BASE_POINTS + key_matches as f64 * POINTS_PER_KEYWORD + fluency * FLUENCY_POINTS;
    let score = raw.round().clamp(0.0, 100.0) as u8;

    EvaluationResult {
        score,
        feedback: build_feedback(key_matches, answer.contains("example"), score),
        matched_keywords,
    }
}

fn build_feedback(key_matches: usize, has_example: bool, score: u8) -> String {
    let mut feedback = Vec::with_capacity(3);

    if key_matches == 0 {
        feedback
            .push("Try to mention core technical keywords related to the question.".to_string());
    } else {
        feedback.push(format!(
            "You referenced {key_matches} important concept(s). Good."
        ));
    }

    if !has_example && key_matches > 0 {
        feedback.push(
            "Include a concrete example or short mini-diagram of your approach.".to_string(),
        );
    }

    feedback.push(closing_remark(score).to_string());
    feedback.join(" ")
}

fn closing_remark(score: u8) -> &'static str {
    if score > 80 {
        "Strong answer: clear structure and relevant keywords."
    } else if score > 60 {
        "Solid answer: try improving examples and edge-case discussion."
    } else {
        "Work on structure: start with a one-sentence summary, then steps, then trade-offs."
    }
}
