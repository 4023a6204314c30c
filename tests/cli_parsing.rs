use clap::Parser;
use interview_ai::cli::{Cli, Mode};

#[test]
fn test_parse_generate_question() {
    let cli = Cli::try_parse_from([
        "interview-ai",
        "--mode",
        "generate_question",
        "--category",
        "technical",
        "--level",
        "beginner",
    ])
    .unwrap();

    assert_eq!(cli.mode, Mode::GenerateQuestion);
    assert_eq!(cli.selection.category.as_deref(), Some("technical"));
    assert_eq!(cli.selection.level.as_deref(), Some("beginner"));
    assert!(cli.response.text.is_none());
}

#[test]
fn test_parse_analyze_response_with_all_inputs() {
    let cli = Cli::try_parse_from([
        "interview-ai",
        "--mode",
        "analyze_response",
        "--video",
        "/uploads/response_1_video.mp4",
        "--audio",
        "/uploads/response_1_audio.mp3",
        "--text",
        "I would virtualize the list.",
        "--category",
        "technical",
        "--level",
        "advanced",
        "--history",
        r#"[{"question":"Q1","response":null}]"#,
    ])
    .unwrap();

    assert_eq!(cli.mode, Mode::AnalyzeResponse);
    assert_eq!(
        cli.response.video.as_deref().map(|p| p.to_string_lossy().into_owned()),
        Some("/uploads/response_1_video.mp4".to_string())
    );
    assert!(cli.response.audio.is_some());
    assert_eq!(cli.response.text.as_deref(), Some("I would virtualize the list."));
    assert!(cli.response.history.unwrap().starts_with('['));
}

#[test]
fn test_unknown_category_is_accepted_by_parser() {
    // Unrecognised labels must reach the fallback question, not fail parsing.
    let cli = Cli::try_parse_from([
        "interview-ai",
        "--mode",
        "generate_question",
        "--category",
        "unknown",
        "--level",
        "beginner",
    ])
    .unwrap();
    assert_eq!(cli.selection.category.as_deref(), Some("unknown"));
}

#[test]
fn test_mode_is_required() {
    assert!(Cli::try_parse_from(["interview-ai", "--category", "general"]).is_err());
}

#[test]
fn test_invalid_mode_rejected() {
    assert!(Cli::try_parse_from(["interview-ai", "--mode", "generate-question"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "interview-ai",
        "--mode",
        "analyze_response",
        "--text",
        "answer",
        "--model-dir",
        "/opt/models",
        "--seed",
        "12",
        "--config",
        "custom.yaml",
    ])
    .unwrap();

    assert_eq!(cli.config.seed, Some(12));
    assert_eq!(
        cli.config.model_dir.unwrap().to_string_lossy(),
        "/opt/models"
    );
    assert_eq!(cli.config.file.unwrap().to_string_lossy(), "custom.yaml");
}

#[test]
fn test_seed_must_be_numeric() {
    assert!(Cli::try_parse_from([
        "interview-ai",
        "--mode",
        "analyze_response",
        "--seed",
        "abc"
    ])
    .is_err());
}
