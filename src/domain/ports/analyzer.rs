use async_trait::async_trait;
use std::path::Path;

use crate::domain::errors::BridgeResult;
use crate::domain::models::{Category, DimensionScore, Modality};

/// What a modality analyzer is asked to look at.
#[derive(Debug, Clone, Copy)]
pub enum AnalysisInput<'a> {
    /// Recorded video of the candidate; scored for confidence
    Video(&'a Path),
    /// Recorded audio of the answer; scored for clarity
    Audio(&'a Path),
    /// Transcribed or typed answer; scored for relevance to the category
    Text {
        answer: &'a str,
        category: Option<Category>,
    },
}

impl AnalysisInput<'_> {
    pub const fn modality(&self) -> Modality {
        match self {
            Self::Video(_) => Modality::Video,
            Self::Audio(_) => Modality::Audio,
            Self::Text { .. } => Modality::Text,
        }
    }
}

/// Port for per-modality analysis backends (facial, audio, NLP).
///
/// The evaluator only aggregates; signal analysis lives behind this trait so
/// model-backed implementations can replace the simulated ones without
/// touching the evaluator. Implementations may be slow; the caller bounds
/// them with its own timeout.
///
/// # Examples
///
/// ```no_run
/// use interview_ai::domain::ports::{AnalysisInput, ModalityAnalyzer};
/// use std::path::Path;
///
/// async fn score(analyzer: &dyn ModalityAnalyzer) {
///     let score = analyzer
///         .analyze(AnalysisInput::Video(Path::new("answer.mp4")))
///         .await;
///     println!("{score:?}");
/// }
/// ```
#[async_trait]
pub trait ModalityAnalyzer: Send + Sync {
    /// Name of the backend, for logs
    fn name(&self) -> &'static str;

    /// Score one modality of a response
    async fn analyze(&self, input: AnalysisInput<'_>) -> BridgeResult<DimensionScore>;
}
