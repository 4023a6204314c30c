//! Interview AI - question and response-evaluation bridge
//!
//! A command-line bridge a backend service spawns to fetch interview
//! questions and to score a candidate's answer. Session state lives with the
//! caller; each invocation reconstructs it from the supplied history.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): interview models, error kinds and port traits
//! - **Service Layer** (`services`): question provider and response evaluator
//! - **Adapters** (`adapters`): question bank, analyzers, continuation policies
//! - **Infrastructure Layer** (`infrastructure`): config, logging, wiring
//! - **CLI Layer** (`cli`): the `--mode` process contract
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use interview_ai::adapters::logging::MemoryLogger;
//! use interview_ai::domain::models::{Category, Config, Level, ResponseInput};
//! use interview_ai::infrastructure::setup::build_services;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let services = build_services(&Config::default(), Arc::new(MemoryLogger::new()));
//!     let question = services
//!         .questions
//!         .get_question(Some(Category::Technical), Some(Level::Beginner))
//!         .await;
//!     let input = ResponseInput::new(Some(Category::Technical), Some(Level::Beginner))
//!         .with_text("React Native renders native views.");
//!     let result = services.evaluator.evaluate(&input).await?;
//!     println!("{} -> {:?}", question.text, result.to_report());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{BridgeError, BridgeResult};
pub use domain::models::{
    Category, Config, DimensionScore, EvaluationReport, EvaluationResult, HistoryEntry, Level,
    Outcome, Question, ResponseInput, SummaryTier,
};
pub use domain::ports::{ContinuationPolicy, Logger, ModalityAnalyzer, QuestionSource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{QuestionProvider, ResponseEvaluator};
