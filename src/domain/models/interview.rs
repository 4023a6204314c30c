//! Interview vocabulary: categories, levels, questions and session history.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::BridgeError;

/// Topical class of an interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technical,
    Behavioral,
    General,
}

impl Category {
    /// Every category, in table order.
    pub const ALL: [Self; 3] = [Self::Technical, Self::Behavioral, Self::General];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
            Self::General => "general",
        }
    }

    /// Categories eligible as the next topic after `current`.
    ///
    /// With no current category every category is eligible.
    pub fn others(current: Option<Self>) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|c| Some(*c) != current)
            .collect()
    }

    /// Lenient parse used at the process boundary: unknown labels become `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            "general" => Ok(Self::General),
            other => Err(BridgeError::input(format!(
                "Invalid category: {other}. Must be one of: technical, behavioral, general"
            ))),
        }
    }
}

/// Difficulty tier of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(BridgeError::input(format!(
                "Invalid level: {other}. Must be one of: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Input channel of a candidate response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Video,
    Audio,
    Text,
}

impl Modality {
    /// Capitalised label used in user-facing messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Text => "Text",
        }
    }
}

/// A question handed to the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text as read to the candidate
    #[serde(rename = "question")]
    pub text: String,

    /// Category the question was drawn from
    #[serde(rename = "type")]
    pub category: Category,

    /// Short answering tip keyed on the category
    #[serde(rename = "tips")]
    pub guidance: String,
}

impl Question {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            guidance: guidance_for(category),
        }
    }
}

/// Templated tip appended to every question of `category`.
pub fn guidance_for(category: Category) -> String {
    format!(
        "When answering this {category} question, be concise and provide specific examples from your experience."
    )
}

/// One prior question/answer pair of the caller-owned session history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub question: String,

    #[serde(default)]
    pub response: Option<String>,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>, response: Option<String>) -> Self {
        Self {
            question: question.into(),
            response,
        }
    }

    /// Parse the JSON array the backend passes on the command line.
    pub fn parse_history(raw: &str) -> Result<Vec<Self>, BridgeError> {
        serde_json::from_str(raw)
            .map_err(|e| BridgeError::input(format!("Invalid interview history: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_lenient_about_case() {
        assert_eq!("Technical".parse::<Category>().unwrap(), Category::Technical);
        assert_eq!(" general ".parse::<Category>().unwrap(), Category::General);
        assert!("unknown".parse::<Category>().is_err());
        assert_eq!(Category::from_label("unknown"), None);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("ADVANCED".parse::<Level>().unwrap(), Level::Advanced);
        assert_eq!(Level::from_label("expert"), None);
    }

    #[test]
    fn test_others_excludes_current() {
        let others = Category::others(Some(Category::Behavioral));
        assert_eq!(others, vec![Category::Technical, Category::General]);
        assert_eq!(Category::others(None).len(), 3);
    }

    #[test]
    fn test_question_serializes_to_wire_shape() {
        let q = Question::new("Why are you interested in this position?", Category::General);
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["question"], "Why are you interested in this position?");
        assert_eq!(value["type"], "general");
        assert!(value["tips"].as_str().unwrap().contains("general"));
    }

    #[test]
    fn test_history_parsing_tolerates_extra_and_missing_fields() {
        let raw = r#"[
            {"question": "Why React Native?", "response": "Cross-platform."},
            {"question": "Where in five years?", "extra": 1}
        ]"#;
        let history = HistoryEntry::parse_history(raw).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].response.as_deref(), Some("Cross-platform."));
        assert_eq!(history[1].response, None);
    }

    #[test]
    fn test_history_parsing_rejects_non_array() {
        let err = HistoryEntry::parse_history("{\"question\": 1}").unwrap_err();
        assert!(matches!(err, BridgeError::InputError(_)));
    }
}
