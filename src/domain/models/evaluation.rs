//! Response evaluation models.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::interview::{Category, HistoryEntry, Level, Modality, Question};
use crate::domain::errors::{BridgeError, BridgeResult};

/// Integer metric in `[0, 100]` describing one facet of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u8")]
pub struct DimensionScore(u8);

impl DimensionScore {
    pub const MAX: u8 = 100;

    /// Build a score, clamping anything above 100.
    pub fn new(value: u32) -> Self {
        Self(u8::try_from(value.min(u32::from(Self::MAX))).unwrap_or(Self::MAX))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u32> for DimensionScore {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<DimensionScore> for u8 {
    fn from(score: DimensionScore) -> Self {
        score.0
    }
}

impl fmt::Display for DimensionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three dimension scores of one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub confidence: DimensionScore,
    pub clarity: DimensionScore,
    pub relevance: DimensionScore,
}

impl DimensionScores {
    pub const fn new(
        confidence: DimensionScore,
        clarity: DimensionScore,
        relevance: DimensionScore,
    ) -> Self {
        Self {
            confidence,
            clarity,
            relevance,
        }
    }

    /// Unweighted integer mean, rounded toward zero.
    pub fn mean(&self) -> u8 {
        let total = u32::from(self.confidence.value())
            + u32::from(self.clarity.value())
            + u32::from(self.relevance.value());
        u8::try_from(total / 3).unwrap_or(DimensionScore::MAX)
    }
}

/// A candidate response as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseInput {
    pub video: Option<PathBuf>,
    pub audio: Option<PathBuf>,
    pub text: Option<String>,
    pub category: Option<Category>,
    pub level: Option<Level>,
    pub history: Vec<HistoryEntry>,
}

impl ResponseInput {
    pub fn new(category: Option<Category>, level: Option<Level>) -> Self {
        Self {
            category,
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_video(mut self, path: impl Into<PathBuf>) -> Self {
        self.video = non_empty_path(path.into());
        self
    }

    #[must_use]
    pub fn with_audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = non_empty_path(path.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub const fn has_modality(&self) -> bool {
        self.video.is_some() || self.audio.is_some() || self.text.is_some()
    }

    /// Media references in validation order (video before audio).
    pub fn media(&self) -> impl Iterator<Item = (Modality, &Path)> {
        [
            (Modality::Video, self.video.as_deref()),
            (Modality::Audio, self.audio.as_deref()),
        ]
        .into_iter()
        .filter_map(|(modality, path)| path.map(|p| (modality, p)))
    }

    /// Boundary check that at least one modality was supplied.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.has_modality() {
            Ok(())
        } else {
            Err(BridgeError::input(
                "At least one of video, audio, or text must be provided",
            ))
        }
    }
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    (!path.as_os_str().is_empty()).then_some(path)
}

/// Summary band of a finished interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryTier {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SummaryTier {
    pub const EXCELLENT_FLOOR: u8 = 85;
    pub const GOOD_FLOOR: u8 = 70;

    pub const fn for_score(overall: u8) -> Self {
        if overall >= Self::EXCELLENT_FLOOR {
            Self::Excellent
        } else if overall >= Self::GOOD_FLOOR {
            Self::Good
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent interview performance! You demonstrated strong communication skills and provided relevant, insightful answers.",
            Self::Good => "Good interview performance. You communicated well, though there's room for improvement in some areas.",
            Self::NeedsImprovement => "You have potential, but need to work on your interview skills. Focus on confidence, clarity, and the relevance of your answers.",
        }
    }
}

/// Where the session goes after this response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The interview carries on with another question.
    Continue { next_question: Question },
    /// The interview is over; terminal for the session.
    Terminate { overall_score: u8, summary: String },
}

/// Scores, feedback and continuation decision for one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub scores: DimensionScores,
    pub feedback: String,
    pub outcome: Outcome,
}

impl EvaluationResult {
    pub const fn confidence(&self) -> DimensionScore {
        self.scores.confidence
    }

    pub const fn clarity(&self) -> DimensionScore {
        self.scores.clarity
    }

    pub const fn relevance(&self) -> DimensionScore {
        self.scores.relevance
    }

    pub const fn continues(&self) -> bool {
        matches!(self.outcome, Outcome::Continue { .. })
    }

    pub const fn next_question(&self) -> Option<&Question> {
        match &self.outcome {
            Outcome::Continue { next_question } => Some(next_question),
            Outcome::Terminate { .. } => None,
        }
    }

    pub const fn overall_score(&self) -> Option<u8> {
        match &self.outcome {
            Outcome::Terminate { overall_score, .. } => Some(*overall_score),
            Outcome::Continue { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Terminate { summary, .. } => Some(summary.as_str()),
            Outcome::Continue { .. } => None,
        }
    }

    /// Flat document emitted by `analyze_response`.
    pub fn to_report(&self) -> EvaluationReport {
        let next = self.next_question();
        EvaluationReport {
            confidence: self.confidence().value(),
            clarity: self.clarity().value(),
            relevance: self.relevance().value(),
            feedback: self.feedback.clone(),
            next_question: next.map(|q| q.text.clone()),
            next_question_type: next.map(|q| q.category),
            overall_score: self.overall_score(),
            summary: self.summary().map(str::to_string),
        }
    }
}

/// Wire form of [`EvaluationResult`]; absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub confidence: u8,
    pub clarity: u8,
    pub relevance: u8,
    pub feedback: String,
    pub next_question: Option<String>,
    pub next_question_type: Option<Category>,
    pub overall_score: Option<u8>,
    pub summary: Option<String>,
}
