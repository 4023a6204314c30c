use async_trait::async_trait;

use crate::domain::errors::BridgeResult;
use crate::domain::models::{Category, Level};
use crate::domain::ports::QuestionSource;

/// Fixed question table, one template per (category, level) cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuestionBank;

impl StaticQuestionBank {
    pub const fn new() -> Self {
        Self
    }

    pub const fn lookup(category: Category, level: Level) -> &'static str {
        match (category, level) {
            (Category::Technical, Level::Beginner) => {
                "Can you explain what React Native is and how it differs from React?"
            }
            (Category::Technical, Level::Intermediate) => {
                "How would you handle state management in a complex React Native application?"
            }
            (Category::Technical, Level::Advanced) => {
                "Describe how you would optimize the performance of a React Native app that renders large lists of data."
            }
            (Category::Behavioral, Level::Beginner) => {
                "Tell me about a time when you had to learn a new skill quickly."
            }
            (Category::Behavioral, Level::Intermediate) => {
                "Describe a situation where you had to resolve a conflict within your team."
            }
            (Category::Behavioral, Level::Advanced) => {
                "Tell me about a time when you had to make a difficult decision with incomplete information."
            }
            (Category::General, Level::Beginner) => "Why are you interested in this position?",
            (Category::General, Level::Intermediate) => "Where do you see yourself in five years?",
            (Category::General, Level::Advanced) => {
                "What unique value would you bring to our organization?"
            }
        }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionBank {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn question_text(&self, category: Category, level: Level) -> BridgeResult<String> {
        Ok(Self::lookup(category, level).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_cell_is_distinct_and_non_empty() {
        let mut seen = HashSet::new();
        for category in Category::ALL {
            for level in Level::ALL {
                let text = StaticQuestionBank::lookup(category, level);
                assert!(!text.is_empty());
                assert!(seen.insert(text), "duplicate question for {category}/{level}");
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[tokio::test]
    async fn test_source_returns_table_entry() {
        let text = StaticQuestionBank::new()
            .question_text(Category::General, Level::Intermediate)
            .await
            .unwrap();
        assert_eq!(text, "Where do you see yourself in five years?");
    }
}
