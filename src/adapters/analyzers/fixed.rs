//! Analyzer that always returns the same score.

use async_trait::async_trait;

use crate::domain::errors::BridgeResult;
use crate::domain::models::DimensionScore;
use crate::domain::ports::{AnalysisInput, ModalityAnalyzer};

/// Deterministic analyzer used for parity runs and forced-score tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedScoreAnalyzer {
    score: DimensionScore,
}

impl FixedScoreAnalyzer {
    pub fn new(score: u32) -> Self {
        Self {
            score: DimensionScore::new(score),
        }
    }
}

#[async_trait]
impl ModalityAnalyzer for FixedScoreAnalyzer {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn analyze(&self, _input: AnalysisInput<'_>) -> BridgeResult<DimensionScore> {
        Ok(self.score)
    }
}
