//! Question provider service.
//!
//! Maps a (category, level) pair to a question through a [`QuestionSource`]
//! and never fails: unknown inputs, source errors and slow sources all
//! degrade to the default question.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{Category, Level, Question};
use crate::domain::ports::{LogFields, LogLevel, Logger, QuestionSource};

/// Question handed out when no table cell applies.
pub const FALLBACK_QUESTION: &str = "Tell me about yourself.";

/// Serves interview questions.
pub struct QuestionProvider {
    source: Arc<dyn QuestionSource>,
    logger: Arc<dyn Logger>,
    timeout: Duration,
}

impl QuestionProvider {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(source: Arc<dyn QuestionSource>, logger: Arc<dyn Logger>) -> Self {
        Self {
            source,
            logger,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Bound on a single source lookup.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The default question, tagged with `category` when one is known.
    pub fn fallback_question(category: Option<Category>) -> Question {
        Question::new(FALLBACK_QUESTION, category.unwrap_or(Category::General))
    }

    /// Question for the given cell, or the fallback when either half is missing.
    pub async fn get_question(&self, category: Option<Category>, level: Option<Level>) -> Question {
        let (Some(cat), Some(lvl)) = (category, level) else {
            self.logger
                .log(
                    LogLevel::Warn,
                    "Unrecognised category or level, using fallback question",
                    LogFields::from([
                        ("category".to_string(), json!(category.map(|c| c.as_str()))),
                        ("level".to_string(), json!(level.map(|l| l.as_str()))),
                    ]),
                )
                .await;
            return Self::fallback_question(category);
        };

        let text = match tokio::time::timeout(self.timeout, self.source.question_text(cat, lvl)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => {
                self.warn_fallback(cat, lvl, "question source returned empty text".to_string())
                    .await;
                return Self::fallback_question(Some(cat));
            }
            Ok(Err(err)) => {
                self.warn_fallback(cat, lvl, err.to_string()).await;
                return Self::fallback_question(Some(cat));
            }
            Err(_) => {
                self.warn_fallback(
                    cat,
                    lvl,
                    format!("question source timed out after {:?}", self.timeout),
                )
                .await;
                return Self::fallback_question(Some(cat));
            }
        };

        self.logger
            .log(
                LogLevel::Info,
                "Question selected",
                LogFields::from([
                    ("category".to_string(), json!(cat.as_str())),
                    ("level".to_string(), json!(lvl.as_str())),
                    ("source".to_string(), json!(self.source.name())),
                ]),
            )
            .await;

        Question::new(text, cat)
    }

    /// Label-based entry point used at the process boundary.
    pub async fn get_question_by_label(&self, category: &str, level: &str) -> Question {
        self.get_question(Category::from_label(category), Level::from_label(level))
            .await
    }

    async fn warn_fallback(&self, category: Category, level: Level, reason: String) {
        self.logger
            .log(
                LogLevel::Warn,
                "Question source failed, using fallback question",
                LogFields::from([
                    ("category".to_string(), json!(category.as_str())),
                    ("level".to_string(), json!(level.as_str())),
                    ("source".to_string(), json!(self.source.name())),
                    ("reason".to_string(), json!(reason)),
                ]),
            )
            .await;
    }
}
