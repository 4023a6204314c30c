//! `Logger` port backed by the global tracing subscriber.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{LogFields, LogLevel, Logger};

/// Forwards structured entries to `tracing`; fields are rendered as one JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Logger for TracingLogger {
    async fn log(&self, level: LogLevel, message: &str, fields: LogFields) {
        let fields = Value::Object(fields.into_iter().collect());
        match level {
            LogLevel::Trace => tracing::trace!(target: "interview_ai", %fields, "{message}"),
            LogLevel::Debug => tracing::debug!(target: "interview_ai", %fields, "{message}"),
            LogLevel::Info => tracing::info!(target: "interview_ai", %fields, "{message}"),
            LogLevel::Warn => tracing::warn!(target: "interview_ai", %fields, "{message}"),
            LogLevel::Error => tracing::error!(target: "interview_ai", %fields, "{message}"),
        }
    }
}
