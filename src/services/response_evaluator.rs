//! Response evaluator service.
//!
//! Validates a candidate response, aggregates the per-modality scores,
//! writes feedback, and moves the session to CONTINUE (with a follow-up
//! question) or TERMINATE (with an overall score and summary). TERMINATE is
//! absorbing: the caller must open a new session to ask anything else.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::adapters::analyzers::AnalyzerSet;
use crate::adapters::rng::{seeded_rng, stream};
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::models::{
    Category, DimensionScore, DimensionScores, EvaluationResult, Outcome, ResponseInput,
};
use crate::domain::ports::{AnalysisInput, ContinuationPolicy, LogFields, LogLevel, Logger, ModalityAnalyzer};
use crate::services::feedback::{summarize, synthesize_feedback};
use crate::services::question_provider::QuestionProvider;

/// Scoring knobs of the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorSettings {
    /// Dimensions strictly below this get a coaching sentence
    pub feedback_threshold: u32,
    /// Score for a modality the candidate did not supply
    pub neutral_score: u32,
}

impl Default for EvaluatorSettings {
    fn default() -> Self {
        Self {
            feedback_threshold: 75,
            neutral_score: 75,
        }
    }
}

/// Picks the next topic uniformly among the categories other than the current one.
pub struct CategorySelector {
    rng: Mutex<StdRng>,
}

impl CategorySelector {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: Mutex::new(seeded_rng(seed, stream::CATEGORY)),
        }
    }

    pub fn next(&self, current: Option<Category>) -> Category {
        let candidates = Category::others(current);
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        candidates
            .choose(&mut *rng)
            .copied()
            .unwrap_or(Category::General)
    }
}

/// Scores responses and decides whether the interview goes on.
pub struct ResponseEvaluator {
    analyzers: AnalyzerSet,
    policy: Arc<dyn ContinuationPolicy>,
    questions: Arc<QuestionProvider>,
    selector: CategorySelector,
    settings: EvaluatorSettings,
    logger: Arc<dyn Logger>,
}

impl ResponseEvaluator {
    pub fn new(
        analyzers: AnalyzerSet,
        policy: Arc<dyn ContinuationPolicy>,
        questions: Arc<QuestionProvider>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            analyzers,
            policy,
            questions,
            selector: CategorySelector::new(None),
            settings: EvaluatorSettings::default(),
            logger,
        }
    }

    #[must_use]
    pub const fn with_settings(mut self, settings: EvaluatorSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: CategorySelector) -> Self {
        self.selector = selector;
        self
    }

    /// Evaluate one response.
    ///
    /// Fails with `InputError` when no modality is present and with
    /// `ResourceNotFound` when a media path does not resolve; nothing is
    /// scored in either case.
    pub async fn evaluate(&self, input: &ResponseInput) -> BridgeResult<EvaluationResult> {
        input.validate()?;
        self.check_media(input).await?;

        let scores = self.score(input).await?;
        let feedback = synthesize_feedback(&scores, self.settings.feedback_threshold);

        let outcome = if self.policy.decide(&input.history) {
            let next_category = self.selector.next(input.category);
            let next_question = self
                .questions
                .get_question(Some(next_category), input.level)
                .await;
            Outcome::Continue { next_question }
        } else {
            let (overall_score, tier) = summarize(&scores);
            Outcome::Terminate {
                overall_score,
                summary: tier.message().to_string(),
            }
        };

        let result = EvaluationResult {
            scores,
            feedback,
            outcome,
        };
        self.log_result(input, &result).await;
        Ok(result)
    }

    async fn check_media(&self, input: &ResponseInput) -> BridgeResult<()> {
        for (modality, path) in input.media() {
            let exists = tokio::fs::try_exists(path).await.unwrap_or(false);
            if !exists {
                let err = BridgeError::ResourceNotFound {
                    modality,
                    path: path.to_path_buf(),
                };
                self.logger
                    .log(
                        LogLevel::Error,
                        "Media reference does not resolve",
                        LogFields::from([
                            ("modality".to_string(), json!(modality)),
                            ("path".to_string(), json!(path.display().to_string())),
                        ]),
                    )
                    .await;
                return Err(err);
            }
        }
        Ok(())
    }

    async fn score(&self, input: &ResponseInput) -> BridgeResult<DimensionScores> {
        let confidence = self
            .score_modality(
                self.analyzers.facial.as_ref(),
                input.video.as_deref().map(AnalysisInput::Video),
            )
            .await?;
        let clarity = self
            .score_modality(
                self.analyzers.audio.as_ref(),
                input.audio.as_deref().map(AnalysisInput::Audio),
            )
            .await?;
        let relevance = self
            .score_modality(
                self.analyzers.text.as_ref(),
                input.text.as_deref().map(|answer| AnalysisInput::Text {
                    answer,
                    category: input.category,
                }),
            )
            .await?;

        Ok(DimensionScores::new(confidence, clarity, relevance))
    }

    async fn score_modality(
        &self,
        analyzer: &dyn ModalityAnalyzer,
        input: Option<AnalysisInput<'_>>,
    ) -> BridgeResult<DimensionScore> {
        let Some(input) = input else {
            return Ok(DimensionScore::new(self.settings.neutral_score));
        };

        let modality = input.modality();
        let score = analyzer.analyze(input).await.map_err(|err| match err {
            BridgeError::InternalError(reason) => {
                BridgeError::internal(format!("{} analysis failed: {reason}", modality.label()))
            }
            other => other,
        })?;

        self.logger
            .log(
                LogLevel::Debug,
                "Modality analyzed",
                LogFields::from([
                    ("analyzer".to_string(), json!(analyzer.name())),
                    ("modality".to_string(), json!(modality)),
                    ("score".to_string(), json!(score.value())),
                ]),
            )
            .await;
        Ok(score)
    }

    async fn log_result(&self, input: &ResponseInput, result: &EvaluationResult) {
        let mut fields = LogFields::from([
            ("confidence".to_string(), json!(result.confidence().value())),
            ("clarity".to_string(), json!(result.clarity().value())),
            ("relevance".to_string(), json!(result.relevance().value())),
            ("history_len".to_string(), json!(input.history.len())),
            ("policy".to_string(), json!(self.policy.name())),
            ("continues".to_string(), json!(result.continues())),
        ]);
        if let Some(next) = result.next_question() {
            fields.insert("next_category".to_string(), json!(next.category));
        }
        if let Some(overall) = result.overall_score() {
            fields.insert("overall_score".to_string(), json!(overall));
        }
        self.logger
            .log(LogLevel::Info, "Response evaluated", fields)
            .await;
    }
}
