//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - QuestionSource: question text generation
//! - ModalityAnalyzer: facial, audio and text analysis
//! - ContinuationPolicy: continue/terminate decision
//! - Logger: structured logging collaborator

pub mod analyzer;
pub mod continuation;
pub mod logger;
pub mod question_source;

pub use analyzer::{AnalysisInput, ModalityAnalyzer};
pub use continuation::ContinuationPolicy;
pub use logger::{LogFields, LogLevel, Logger};
pub use question_source::QuestionSource;
