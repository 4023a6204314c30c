//! Coaching feedback and final summary synthesis.

use crate::domain::models::{DimensionScores, SummaryTier};

pub const CONFIDENCE_TIP: &str =
    "Try to maintain better eye contact and more confident body language.";
pub const CLARITY_TIP: &str =
    "Work on speaking more clearly and structuring your thoughts better.";
pub const RELEVANCE_TIP: &str =
    "Your answer could be more relevant to the question. Focus on addressing the key points.";
pub const PRAISE: &str = "Good job! Your response was clear, confident, and relevant.";

/// One coaching sentence per dimension under `threshold`, in
/// confidence, clarity, relevance order; praise when none apply.
pub fn synthesize_feedback(scores: &DimensionScores, threshold: u32) -> String {
    let points: Vec<&str> = [
        (scores.confidence, CONFIDENCE_TIP),
        (scores.clarity, CLARITY_TIP),
        (scores.relevance, RELEVANCE_TIP),
    ]
    .into_iter()
    .filter(|(score, _)| u32::from(score.value()) < threshold)
    .map(|(_, tip)| tip)
    .collect();

    if points.is_empty() {
        PRAISE.to_string()
    } else {
        points.join(" ")
    }
}

/// Overall score and summary message for a finished interview.
pub fn summarize(scores: &DimensionScores) -> (u8, SummaryTier) {
    let overall = scores.mean();
    (overall, SummaryTier::for_score(overall))
}
