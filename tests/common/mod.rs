//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use interview_ai::adapters::analyzers::AnalyzerSet;
use interview_ai::adapters::continuation::FixedContinuation;
use interview_ai::adapters::logging::MemoryLogger;
use interview_ai::adapters::questions::StaticQuestionBank;
use interview_ai::services::{CategorySelector, QuestionProvider, ResponseEvaluator};
use tempfile::{NamedTempFile, TempDir};

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a working directory containing an (empty) analysis model directory
///
/// Returns the guard and the model directory path.
#[allow(dead_code)]
pub fn workspace_with_models() -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let models = dir.path().join("ForsaPlus_Model-AI-Interview");
    std::fs::create_dir_all(&models).expect("Failed to create model dir");
    (dir, models)
}

/// Write a fake media file with the given suffix
#[allow(dead_code)]
pub fn media_file(suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create media file");
    file.write_all(b"not really media").expect("Failed to write media file");
    file
}

/// Evaluator wired with a fixed analyzer score and a fixed continuation decision
#[allow(dead_code)]
pub fn fixed_evaluator(score: u32, continues: bool) -> (ResponseEvaluator, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let questions = Arc::new(QuestionProvider::new(
        Arc::new(StaticQuestionBank::new()),
        logger.clone(),
    ));
    let evaluator = ResponseEvaluator::new(
        AnalyzerSet::fixed(score),
        Arc::new(FixedContinuation(continues)),
        questions,
        logger.clone(),
    )
    .with_selector(CategorySelector::new(Some(17)));
    (evaluator, logger)
}
