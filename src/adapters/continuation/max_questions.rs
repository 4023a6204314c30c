use crate::domain::models::HistoryEntry;
use crate::domain::ports::ContinuationPolicy;

/// Deterministic policy: keep asking while fewer than `max_questions`
/// answers are on record.
#[derive(Debug, Clone, Copy)]
pub struct MaxQuestionsContinuation {
    max_questions: usize,
}

impl MaxQuestionsContinuation {
    pub const fn new(max_questions: usize) -> Self {
        Self { max_questions }
    }
}

impl ContinuationPolicy for MaxQuestionsContinuation {
    fn name(&self) -> &'static str {
        "max_questions"
    }

    fn decide(&self, history: &[HistoryEntry]) -> bool {
        history.len() < self.max_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> Vec<HistoryEntry> {
        (0..n)
            .map(|i| HistoryEntry::new(format!("Question {i}"), Some("answer".to_string())))
            .collect()
    }

    #[test]
    fn test_continues_until_limit() {
        let policy = MaxQuestionsContinuation::new(3);
        assert!(policy.decide(&history(0)));
        assert!(policy.decide(&history(2)));
        assert!(!policy.decide(&history(3)));
        assert!(!policy.decide(&history(7)));
    }
}
