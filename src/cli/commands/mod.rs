//! CLI command implementations.

pub mod analyze_response;
pub mod generate_question;
