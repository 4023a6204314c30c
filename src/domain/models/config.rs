use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the interview bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Directory holding the analysis models; must exist before any mode runs
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Seed for every random source; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoring and feedback configuration
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Continue/terminate policy configuration
    #[serde(default)]
    pub continuation: ContinuationConfig,

    /// Operation timeouts
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("ForsaPlus_Model-AI-Interview")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            seed: None,
            logging: LoggingConfig::default(),
            evaluation: EvaluationConfig::default(),
            continuation: ContinuationConfig::default(),
            timeouts: TimeoutConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for the log file; logs go to stderr when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file name inside `log_dir`
    #[serde(default = "default_log_file")]
    pub file_name: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_file() -> String {
    "interview_ai.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            file_name: default_log_file(),
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EvaluationConfig {
    /// Analyzer backend: simulated or fixed
    #[serde(default = "default_analyzer")]
    pub analyzer: String,

    /// Score returned by every analyzer when `analyzer` is fixed
    #[serde(default = "default_neutral_score")]
    pub fixed_score: u32,

    /// Dimensions scoring below this get a coaching sentence
    #[serde(default = "default_feedback_threshold")]
    pub feedback_threshold: u32,

    /// Score contributed by a modality that was not supplied
    #[serde(default = "default_neutral_score")]
    pub neutral_score: u32,

    /// Lower bound of simulated scores (inclusive)
    #[serde(default = "default_simulated_min")]
    pub simulated_min: u32,

    /// Upper bound of simulated scores (inclusive)
    #[serde(default = "default_simulated_max")]
    pub simulated_max: u32,
}

fn default_analyzer() -> String {
    "simulated".to_string()
}

const fn default_feedback_threshold() -> u32 {
    75
}

const fn default_neutral_score() -> u32 {
    75
}

const fn default_simulated_min() -> u32 {
    60
}

const fn default_simulated_max() -> u32 {
    100
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            analyzer: default_analyzer(),
            fixed_score: default_neutral_score(),
            feedback_threshold: default_feedback_threshold(),
            neutral_score: default_neutral_score(),
            simulated_min: default_simulated_min(),
            simulated_max: default_simulated_max(),
        }
    }
}

/// Continuation policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContinuationConfig {
    /// Policy: random, max_questions, always, never
    #[serde(default = "default_policy")]
    pub policy: String,

    /// Probability of continuing under the random policy
    #[serde(default = "default_probability")]
    pub probability: f64,

    /// Session length under the max_questions policy
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
}

fn default_policy() -> String {
    "random".to_string()
}

const fn default_probability() -> f64 {
    0.8
}

const fn default_max_questions() -> usize {
    5
}

impl Default for ContinuationConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            probability: default_probability(),
            max_questions: default_max_questions(),
        }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeoutConfig {
    /// Upper bound on a whole CLI operation, in seconds
    #[serde(default = "default_operation_secs")]
    pub operation_secs: u64,

    /// Upper bound on a single question lookup, in milliseconds
    #[serde(default = "default_question_generation_ms")]
    pub question_generation_ms: u64,
}

const fn default_operation_secs() -> u64 {
    120
}

const fn default_question_generation_ms() -> u64 {
    2_000
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            operation_secs: default_operation_secs(),
            question_generation_ms: default_question_generation_ms(),
        }
    }
}
