//! Implementation of `--mode analyze_response`.

use crate::cli::types::{ResponseArgs, SelectionArgs};
use crate::domain::errors::BridgeResult;
use crate::domain::models::{Category, EvaluationReport, HistoryEntry, Level, ResponseInput};
use crate::services::ResponseEvaluator;

/// Assemble a [`ResponseInput`] from raw arguments.
///
/// The modality check runs before the history is parsed, so a call with no
/// answer at all reports that rather than a history problem.
pub fn build_input(selection: &SelectionArgs, response: &ResponseArgs) -> BridgeResult<ResponseInput> {
    let category = selection.category.as_deref().and_then(|raw| {
        let parsed = Category::from_label(raw);
        if parsed.is_none() {
            tracing::warn!(category = raw, "unrecognised category, treating as absent");
        }
        parsed
    });
    let level = selection.level.as_deref().and_then(|raw| {
        let parsed = Level::from_label(raw);
        if parsed.is_none() {
            tracing::warn!(level = raw, "unrecognised level, treating as absent");
        }
        parsed
    });

    let mut input = ResponseInput::new(category, level);
    if let Some(video) = &response.video {
        input = input.with_video(video);
    }
    if let Some(audio) = &response.audio {
        input = input.with_audio(audio);
    }
    if let Some(text) = &response.text {
        input = input.with_text(text);
    }
    input.validate()?;

    let history = match response.history.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => HistoryEntry::parse_history(raw)?,
        _ => Vec::new(),
    };

    Ok(input.with_history(history))
}

pub async fn execute(
    selection: &SelectionArgs,
    response: &ResponseArgs,
    evaluator: &ResponseEvaluator,
) -> BridgeResult<EvaluationReport> {
    let input = build_input(selection, response)?;
    let result = evaluator.evaluate(&input).await?;
    Ok(result.to_report())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::BridgeError;

    fn selection(category: &str, level: &str) -> SelectionArgs {
        SelectionArgs {
            category: Some(category.to_string()),
            level: Some(level.to_string()),
        }
    }

    #[test]
    fn test_no_modality_reported_before_bad_history() {
        let response = ResponseArgs {
            history: Some("not json".to_string()),
            ..ResponseArgs::default()
        };
        let err = build_input(&selection("technical", "beginner"), &response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one of video, audio, or text must be provided"
        );
    }

    #[test]
    fn test_bad_history_is_input_error() {
        let response = ResponseArgs {
            text: Some("My answer".to_string()),
            history: Some("{".to_string()),
            ..ResponseArgs::default()
        };
        let err = build_input(&selection("technical", "beginner"), &response).unwrap_err();
        assert!(matches!(err, BridgeError::InputError(_)));
        assert!(err.to_string().starts_with("Invalid interview history"));
    }

    #[test]
    fn test_unknown_labels_become_absent() {
        let response = ResponseArgs {
            text: Some("My answer".to_string()),
            history: Some(r#"[{"question": "Q1", "response": "A1"}]"#.to_string()),
            ..ResponseArgs::default()
        };
        let input = build_input(&selection("astrology", "advanced"), &response).unwrap();
        assert_eq!(input.category, None);
        assert_eq!(input.level, Some(Level::Advanced));
        assert_eq!(input.history.len(), 1);
    }

    #[test]
    fn test_empty_history_string_is_empty_history() {
        let response = ResponseArgs {
            text: Some("My answer".to_string()),
            history: Some("   ".to_string()),
            ..ResponseArgs::default()
        };
        let input = build_input(&selection("general", "beginner"), &response).unwrap();
        assert!(input.history.is_empty());
    }
}
