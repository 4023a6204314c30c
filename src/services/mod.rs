//! Service layer: question selection and response evaluation.

pub mod feedback;
pub mod question_provider;
pub mod response_evaluator;

pub use question_provider::{QuestionProvider, FALLBACK_QUESTION};
pub use response_evaluator::{CategorySelector, EvaluatorSettings, ResponseEvaluator};
