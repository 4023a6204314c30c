//! Service wiring
//!
//! Builds the question provider and the response evaluator from a loaded
//! [`Config`], and checks the startup precondition on the model directory.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::analyzers::AnalyzerSet;
use crate::adapters::continuation::{
    FixedContinuation, MaxQuestionsContinuation, RandomContinuation,
};
use crate::adapters::questions::StaticQuestionBank;
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::models::Config;
use crate::domain::ports::{ContinuationPolicy, Logger};
use crate::services::{CategorySelector, EvaluatorSettings, QuestionProvider, ResponseEvaluator};

/// Human-readable name of the model directory in precondition errors.
pub const MODEL_DIR_RESOURCE: &str = "Analysis model directory";

/// Everything a CLI invocation needs.
pub struct Services {
    pub questions: Arc<QuestionProvider>,
    pub evaluator: ResponseEvaluator,
}

/// Fail with `PreconditionFailed` unless the model directory exists.
pub fn check_model_dir(config: &Config) -> BridgeResult<()> {
    if config.model_dir.is_dir() {
        Ok(())
    } else {
        Err(BridgeError::PreconditionFailed {
            resource: MODEL_DIR_RESOURCE.to_string(),
            path: config.model_dir.clone(),
        })
    }
}

/// Continuation policy named by `continuation.policy`.
///
/// Unknown names are rejected by config validation; they map to the random
/// policy here.
pub fn continuation_policy(config: &Config) -> Arc<dyn ContinuationPolicy> {
    let continuation = &config.continuation;
    match continuation.policy.as_str() {
        "max_questions" => Arc::new(MaxQuestionsContinuation::new(continuation.max_questions)),
        "always" => Arc::new(FixedContinuation::always()),
        "never" => Arc::new(FixedContinuation::never()),
        _ => Arc::new(RandomContinuation::new(continuation.probability, config.seed)),
    }
}

/// Analyzer backend named by `evaluation.analyzer`.
pub fn analyzers(config: &Config) -> AnalyzerSet {
    let evaluation = &config.evaluation;
    match evaluation.analyzer.as_str() {
        "fixed" => AnalyzerSet::fixed(evaluation.fixed_score),
        _ => AnalyzerSet::simulated(
            evaluation.simulated_min..=evaluation.simulated_max,
            config.seed,
        ),
    }
}

/// Wire adapters and services from configuration.
pub fn build_services(config: &Config, logger: Arc<dyn Logger>) -> Services {
    let questions = Arc::new(
        QuestionProvider::new(Arc::new(StaticQuestionBank::new()), logger.clone())
            .with_timeout(Duration::from_millis(config.timeouts.question_generation_ms)),
    );

    let evaluator = ResponseEvaluator::new(
        analyzers(config),
        continuation_policy(config),
        questions.clone(),
        logger,
    )
    .with_settings(EvaluatorSettings {
        feedback_threshold: config.evaluation.feedback_threshold,
        neutral_score: config.evaluation.neutral_score,
    })
    .with_selector(CategorySelector::new(config.seed));

    Services {
        questions,
        evaluator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::MemoryLogger;
    use crate::domain::models::{Category, Level, ResponseInput};

    #[test]
    fn test_missing_model_dir_is_precondition_failure() {
        let config = Config {
            model_dir: "/nonexistent/models".into(),
            ..Config::default()
        };
        let err = check_model_dir(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Analysis model directory not found at /nonexistent/models"
        );
    }

    #[test]
    fn test_existing_model_dir_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            model_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(check_model_dir(&config).is_ok());
    }

    #[test]
    fn test_policy_selection() {
        let mut config = Config::default();
        assert_eq!(continuation_policy(&config).name(), "random");
        config.continuation.policy = "max_questions".to_string();
        assert_eq!(continuation_policy(&config).name(), "max_questions");
        config.continuation.policy = "never".to_string();
        assert_eq!(continuation_policy(&config).name(), "never");
    }

    #[tokio::test]
    async fn test_fixed_never_config_terminates_with_fixed_scores() {
        let mut config = Config::default();
        config.evaluation.analyzer = "fixed".to_string();
        config.evaluation.fixed_score = 72;
        config.evaluation.neutral_score = 72;
        config.continuation.policy = "never".to_string();

        let services = build_services(&config, Arc::new(MemoryLogger::new()));
        let input = ResponseInput::new(Some(Category::Behavioral), Some(Level::Advanced))
            .with_text("I gathered what data I could and decided.");
        let result = services.evaluator.evaluate(&input).await.unwrap();
        assert_eq!(result.overall_score(), Some(72));
    }

    #[tokio::test]
    async fn test_seeded_services_are_reproducible() {
        let config = Config {
            seed: Some(2024),
            ..Config::default()
        };
        let input = ResponseInput::new(Some(Category::Technical), Some(Level::Intermediate))
            .with_text("Redux or Zustand, depending on scale.");

        let first = build_services(&config, Arc::new(MemoryLogger::new()))
            .evaluator
            .evaluate(&input)
            .await
            .unwrap();
        let second = build_services(&config, Arc::new(MemoryLogger::new()))
            .evaluator
            .evaluate(&input)
            .await
            .unwrap();
        assert_eq!(first, second);
    }
}
