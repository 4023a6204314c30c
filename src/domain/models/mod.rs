pub mod config;
pub mod evaluation;
pub mod interview;

pub use config::{Config, ContinuationConfig, EvaluationConfig, LoggingConfig, TimeoutConfig};
pub use evaluation::{
    DimensionScore, DimensionScores, EvaluationReport, EvaluationResult, Outcome, ResponseInput,
    SummaryTier,
};
pub use interview::{guidance_for, Category, HistoryEntry, Level, Modality, Question};
