//! Question source adapters.

pub mod static_bank;

pub use static_bank::StaticQuestionBank;
