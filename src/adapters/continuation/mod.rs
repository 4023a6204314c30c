//! Continuation policy adapters.

pub mod max_questions;
pub mod random;

pub use max_questions::MaxQuestionsContinuation;
pub use random::RandomContinuation;

use crate::domain::models::HistoryEntry;
use crate::domain::ports::ContinuationPolicy;

/// Always continues (`true`) or always terminates (`false`).
#[derive(Debug, Clone, Copy)]
pub struct FixedContinuation(pub bool);

impl FixedContinuation {
    pub const fn always() -> Self {
        Self(true)
    }

    pub const fn never() -> Self {
        Self(false)
    }
}

impl ContinuationPolicy for FixedContinuation {
    fn name(&self) -> &'static str {
        if self.0 {
            "always"
        } else {
            "never"
        }
    }

    fn decide(&self, _history: &[HistoryEntry]) -> bool {
        self.0
    }
}
