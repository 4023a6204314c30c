//! Implementation of `--mode generate_question`.

use crate::cli::types::SelectionArgs;
use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::models::Question;
use crate::services::QuestionProvider;

pub async fn execute(args: &SelectionArgs, questions: &QuestionProvider) -> BridgeResult<Question> {
    let (Some(category), Some(level)) = (present(args.category.as_deref()), present(args.level.as_deref()))
    else {
        return Err(BridgeError::input(
            "Category and level are required for question generation",
        ));
    };

    Ok(questions.get_question_by_label(category, level).await)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::MemoryLogger;
    use crate::adapters::questions::StaticQuestionBank;
    use crate::domain::models::Category;
    use std::sync::Arc;

    fn provider() -> QuestionProvider {
        QuestionProvider::new(Arc::new(StaticQuestionBank::new()), Arc::new(MemoryLogger::new()))
    }

    fn args(category: Option<&str>, level: Option<&str>) -> SelectionArgs {
        SelectionArgs {
            category: category.map(str::to_string),
            level: level.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_missing_level_is_input_error() {
        let err = execute(&args(Some("technical"), None), &provider())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Category and level are required for question generation"
        );
    }

    #[tokio::test]
    async fn test_blank_category_is_input_error() {
        let err = execute(&args(Some("  "), Some("beginner")), &provider())
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::InputError(_)));
    }

    #[tokio::test]
    async fn test_valid_cell() {
        let q = execute(&args(Some("behavioral"), Some("intermediate")), &provider())
            .await
            .unwrap();
        assert_eq!(
            q.text,
            "Describe a situation where you had to resolve a conflict within your team."
        );
        assert_eq!(q.category, Category::Behavioral);
    }
}
