use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration file picked up when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "interview-ai.yaml";

/// Prefix of environment overrides, e.g. `INTERVIEW_AI_CONTINUATION__POLICY`.
pub const ENV_PREFIX: &str = "INTERVIEW_AI_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Log file name cannot be empty")]
    EmptyLogFileName,

    #[error("Model directory path cannot be empty")]
    EmptyModelDir,

    #[error("Invalid analyzer: {0}. Must be one of: simulated, fixed")]
    InvalidAnalyzer(String),

    #[error("Invalid {field}: {value}. Must be between 0 and 100")]
    ScoreOutOfRange { field: &'static str, value: u32 },

    #[error("Invalid simulated range: simulated_min ({0}) must not exceed simulated_max ({1})")]
    InvalidSimulatedRange(u32, u32),

    #[error("Invalid continuation policy: {0}. Must be one of: random, max_questions, always, never")]
    InvalidPolicy(String),

    #[error("Invalid continuation probability: {0}. Must be between 0.0 and 1.0")]
    InvalidProbability(f64),

    #[error("Invalid max_questions: {0}. Must be at least 1")]
    InvalidMaxQuestions(usize),

    #[error("Invalid timeout: {0} must be greater than zero")]
    InvalidTimeout(&'static str),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `./interview-ai.yaml` when no path is given (optional)
    /// 3. Environment variables (`INTERVIEW_AI_*`, `__` separates nested keys)
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        if path.is_some() && !file.exists() {
            anyhow::bail!("Config file not found: {}", file.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.model_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyModelDir);
        }

        // Logging
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.logging.file_name.is_empty() {
            return Err(ConfigError::EmptyLogFileName);
        }

        // Evaluation
        let evaluation = &config.evaluation;
        if !["simulated", "fixed"].contains(&evaluation.analyzer.as_str()) {
            return Err(ConfigError::InvalidAnalyzer(evaluation.analyzer.clone()));
        }

        for (field, value) in [
            ("fixed_score", evaluation.fixed_score),
            ("feedback_threshold", evaluation.feedback_threshold),
            ("neutral_score", evaluation.neutral_score),
            ("simulated_max", evaluation.simulated_max),
        ] {
            if value > 100 {
                return Err(ConfigError::ScoreOutOfRange { field, value });
            }
        }

        if evaluation.simulated_min > evaluation.simulated_max {
            return Err(ConfigError::InvalidSimulatedRange(
                evaluation.simulated_min,
                evaluation.simulated_max,
            ));
        }

        // Continuation
        let continuation = &config.continuation;
        if !["random", "max_questions", "always", "never"].contains(&continuation.policy.as_str()) {
            return Err(ConfigError::InvalidPolicy(continuation.policy.clone()));
        }

        if !(0.0..=1.0).contains(&continuation.probability) {
            return Err(ConfigError::InvalidProbability(continuation.probability));
        }

        if continuation.max_questions == 0 {
            return Err(ConfigError::InvalidMaxQuestions(continuation.max_questions));
        }

        // Timeouts
        if config.timeouts.operation_secs == 0 {
            return Err(ConfigError::InvalidTimeout("operation_secs"));
        }

        if config.timeouts.question_generation_ms == 0 {
            return Err(ConfigError::InvalidTimeout("question_generation_ms"));
        }

        Ok(())
    }
}
