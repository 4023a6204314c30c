//! Modality analyzer adapters.

pub mod fixed;
pub mod simulated;

pub use fixed::FixedScoreAnalyzer;
pub use simulated::SimulatedAnalyzer;

use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::domain::ports::ModalityAnalyzer;

/// The three per-modality collaborators an evaluator aggregates.
#[derive(Clone)]
pub struct AnalyzerSet {
    /// Facial analysis of the video; drives confidence
    pub facial: Arc<dyn ModalityAnalyzer>,
    /// Speech analysis of the audio; drives clarity
    pub audio: Arc<dyn ModalityAnalyzer>,
    /// NLP analysis of the text answer; drives relevance
    pub text: Arc<dyn ModalityAnalyzer>,
}

impl AnalyzerSet {
    pub fn new(
        facial: Arc<dyn ModalityAnalyzer>,
        audio: Arc<dyn ModalityAnalyzer>,
        text: Arc<dyn ModalityAnalyzer>,
    ) -> Self {
        Self {
            facial,
            audio,
            text,
        }
    }

    pub fn simulated(range: RangeInclusive<u32>, seed: Option<u64>) -> Self {
        Self::new(
            Arc::new(SimulatedAnalyzer::facial(range.clone(), seed)),
            Arc::new(SimulatedAnalyzer::audio(range.clone(), seed)),
            Arc::new(SimulatedAnalyzer::text(range, seed)),
        )
    }

    /// Every modality scores `score`.
    pub fn fixed(score: u32) -> Self {
        let analyzer = Arc::new(FixedScoreAnalyzer::new(score));
        Self::new(analyzer.clone(), analyzer.clone(), analyzer)
    }
}

impl std::fmt::Debug for AnalyzerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerSet")
            .field("facial", &self.facial.name())
            .field("audio", &self.audio.name())
            .field("text", &self.text.name())
            .finish()
    }
}
