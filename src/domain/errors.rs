//! Domain errors for the interview bridge.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::Modality;

/// Errors surfaced by the question provider and the response evaluator.
///
/// Every variant maps to a single `{"error": ...}` document at the CLI
/// boundary; the `Display` text is the message the caller sees.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Missing or contradictory arguments (no modality, bad history JSON, ...).
    #[error("{0}")]
    InputError(String),

    /// A supplied media reference does not resolve to a readable file.
    #[error("{} file not found: {}", .modality.label(), .path.display())]
    ResourceNotFound { modality: Modality, path: PathBuf },

    /// A required external resource is absent at startup.
    #[error("{resource} not found at {}", .path.display())]
    PreconditionFailed { resource: String, path: PathBuf },

    /// Anything unexpected during generation or analysis.
    #[error("Unexpected error: {0}")]
    InternalError(String),
}

impl BridgeError {
    /// Stable label used in structured log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InputError(_) => "input_error",
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::PreconditionFailed { .. } => "precondition_failed",
            Self::InternalError(_) => "internal_error",
        }
    }

    pub fn input(reason: impl Into<String>) -> Self {
        Self::InputError(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::InternalError(reason.into())
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InternalError(format!("serialization failed: {err}"))
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_names_modality_and_path() {
        let err = BridgeError::ResourceNotFound {
            modality: Modality::Video,
            path: PathBuf::from("/tmp/missing.mp4"),
        };
        assert_eq!(err.to_string(), "Video file not found: /tmp/missing.mp4");
        assert_eq!(err.kind(), "resource_not_found");
    }

    #[test]
    fn test_precondition_message() {
        let err = BridgeError::PreconditionFailed {
            resource: "Analysis model directory".to_string(),
            path: PathBuf::from("/opt/models"),
        };
        assert_eq!(
            err.to_string(),
            "Analysis model directory not found at /opt/models"
        );
    }

    #[test]
    fn test_input_error_is_passed_through() {
        let err = BridgeError::input("At least one of video, audio, or text must be provided");
        assert_eq!(
            err.to_string(),
            "At least one of video, audio, or text must be provided"
        );
        assert_eq!(err.kind(), "input_error");
    }

    #[test]
    fn test_anyhow_becomes_internal() {
        let err: BridgeError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, BridgeError::InternalError(_)));
        assert_eq!(err.to_string(), "Unexpected error: boom");
    }
}
