use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Log level enumeration for structured logging
///
/// Levels are ordered from most verbose (Trace) to most severe (Error).
///
/// # Examples
///
/// ```
/// use interview_ai::domain::ports::LogLevel;
///
/// assert!(LogLevel::Error > LogLevel::Info);
/// assert!(LogLevel::Trace < LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Most verbose level - detailed trace information
    Trace,
    /// Debug information useful during development
    Debug,
    /// Informational messages about normal operations
    Info,
    /// Warning messages for potentially problematic situations
    Warn,
    /// Error messages for failure conditions
    Error,
}

impl LogLevel {
    /// Returns the string representation of the log level
    ///
    /// ```
    /// use interview_ai::domain::ports::LogLevel;
    ///
    /// assert_eq!(LogLevel::Info.as_str(), "INFO");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Structured fields attached to a log entry.
pub type LogFields = HashMap<String, Value>;

/// Port trait for the logging collaborator injected into the provider and
/// the evaluator.
///
/// The core never touches a global subscriber directly; it reports through
/// this trait so tests can capture entries and deployments can forward them
/// to any backend.
///
/// # Examples
///
/// ```
/// use interview_ai::domain::ports::{Logger, LogLevel};
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// async fn example(logger: &dyn Logger) {
///     let mut fields = HashMap::new();
///     fields.insert("category".to_string(), json!("technical"));
///     logger.log(LogLevel::Info, "Question selected", fields).await;
///
///     logger.warn("Falling back to default question").await;
/// }
/// ```
#[async_trait]
pub trait Logger: Send + Sync {
    /// Log a message with a specific level and structured fields
    async fn log(&self, level: LogLevel, message: &str, fields: LogFields);

    /// Log a debug-level message
    async fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, LogFields::new()).await;
    }

    /// Log an info-level message
    async fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, LogFields::new()).await;
    }

    /// Log a warning-level message
    async fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, LogFields::new()).await;
    }

    /// Log an error-level message
    async fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, LogFields::new()).await;
    }
}
