//! CLI type definitions
//!
//! This module contains the clap structures that define the process-boundary
//! contract the backend invokes.

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "interview-ai")]
#[command(about = "Interview AI bridge - serves questions and scores candidate responses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Operation mode
    #[arg(long, value_enum)]
    pub mode: Mode,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub response: ResponseArgs,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Return a question for a category and level
    #[value(name = "generate_question")]
    GenerateQuestion,

    /// Score a response and decide whether the interview continues
    #[value(name = "analyze_response")]
    AnalyzeResponse,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GenerateQuestion => "generate_question",
            Self::AnalyzeResponse => "analyze_response",
        }
    }
}

/// Question cell selection, shared by both modes.
///
/// Values are free text so unrecognised labels reach the fallback question
/// instead of failing argument parsing.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Question category (technical, behavioral, general)
    #[arg(long)]
    pub category: Option<String>,

    /// Difficulty level (beginner, intermediate, advanced)
    #[arg(long)]
    pub level: Option<String>,
}

/// Candidate response inputs for `analyze_response`.
#[derive(Args, Debug, Clone, Default)]
pub struct ResponseArgs {
    /// Path to the recorded video answer
    #[arg(long)]
    pub video: Option<PathBuf>,

    /// Path to the recorded audio answer
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Text of the answer
    #[arg(long)]
    pub text: Option<String>,

    /// JSON array of prior {question, response} pairs
    #[arg(long)]
    pub history: Option<String>,
}

/// Configuration overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Configuration file (defaults to ./interview-ai.yaml when present)
    #[arg(long = "config", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Analysis model directory
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Seed for simulated scoring and continuation draws
    #[arg(long)]
    pub seed: Option<u64>,
}
