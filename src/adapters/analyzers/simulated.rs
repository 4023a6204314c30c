//! Simulated analysis backend.
//!
//! Draws a uniform integer score per call. Stands in for the facial, audio
//! and text models until real inference is wired behind the same port.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Mutex;

use crate::adapters::rng::{seeded_rng, stream};
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::models::DimensionScore;
use crate::domain::ports::{AnalysisInput, ModalityAnalyzer};

/// Placeholder analyzer producing random scores in a fixed range.
pub struct SimulatedAnalyzer {
    name: &'static str,
    range: RangeInclusive<u32>,
    rng: Mutex<StdRng>,
}

impl SimulatedAnalyzer {
    /// Scores drawn from `range`; capped at 100 on the way out.
    pub fn new(name: &'static str, range: RangeInclusive<u32>, rng: StdRng) -> Self {
        Self {
            name,
            range,
            rng: Mutex::new(rng),
        }
    }

    pub fn facial(range: RangeInclusive<u32>, seed: Option<u64>) -> Self {
        Self::new("simulated-facial", range, seeded_rng(seed, stream::FACIAL))
    }

    pub fn audio(range: RangeInclusive<u32>, seed: Option<u64>) -> Self {
        Self::new("simulated-audio", range, seeded_rng(seed, stream::AUDIO))
    }

    pub fn text(range: RangeInclusive<u32>, seed: Option<u64>) -> Self {
        Self::new("simulated-text", range, seeded_rng(seed, stream::TEXT))
    }
}

#[async_trait]
impl ModalityAnalyzer for SimulatedAnalyzer {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn analyze(&self, _input: AnalysisInput<'_>) -> BridgeResult<DimensionScore> {
        let value = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| BridgeError::internal(format!("{} random source poisoned", self.name)))?;
            rng.gen_range(self.range.clone())
        };

        Ok(DimensionScore::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[tokio::test]
    async fn test_scores_stay_in_range() {
        let analyzer = SimulatedAnalyzer::facial(60..=100, Some(42));
        for _ in 0..200 {
            let score = analyzer
                .analyze(AnalysisInput::Video(Path::new("v.mp4")))
                .await
                .unwrap();
            assert!((60..=100).contains(&score.value()));
        }
    }

    #[tokio::test]
    async fn test_seeded_analyzers_are_reproducible() {
        let a = SimulatedAnalyzer::text(0..=100, Some(9));
        let b = SimulatedAnalyzer::text(0..=100, Some(9));
        let input = AnalysisInput::Text {
            answer: "I use FlatList virtualization.",
            category: None,
        };
        for _ in 0..10 {
            assert_eq!(a.analyze(input).await.unwrap(), b.analyze(input).await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_out_of_range_upper_bound_is_clamped() {
        let analyzer = SimulatedAnalyzer::audio(150..=200, Some(1));
        let score = analyzer
            .analyze(AnalysisInput::Audio(Path::new("a.mp3")))
            .await
            .unwrap();
        assert_eq!(score.value(), 100);
    }
}
