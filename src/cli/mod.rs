//! Command-line interface.
//!
//! Every invocation ends in exactly one JSON document on stdout and an exit
//! code: 0 on success, 1 on any error.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, ConfigArgs, Mode, ResponseArgs, SelectionArgs};

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;
use uuid::Uuid;

use crate::domain::errors::{BridgeError, BridgeResult};
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LoggerImpl, TracingLogger};
use crate::infrastructure::setup::{build_services, check_model_dir, Services};

/// Load configuration and apply command-line overrides on top.
pub fn load_config(args: &ConfigArgs) -> BridgeResult<Config> {
    let mut config = ConfigLoader::load(args.file.as_deref())?;
    if let Some(model_dir) = &args.model_dir {
        config.model_dir.clone_from(model_dir);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

/// Convert an argument parsing failure into an `InputError`.
pub fn parse_error(err: &clap::Error) -> BridgeError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    BridgeError::input(first_line.trim_start_matches("error: ").trim())
}

/// Log an error and write its JSON document.
pub fn handle_error(err: &BridgeError) -> ExitCode {
    tracing::error!(kind = err.kind(), error = %err, "request failed");
    output::emit_error(err);
    ExitCode::FAILURE
}

/// Like [`handle_error`], for failures that happen before the configured
/// logger is installed.
pub fn handle_startup_error(err: &BridgeError) -> ExitCode {
    LoggerImpl::init_stderr_fallback();
    handle_error(err)
}

/// Run one invocation end to end.
pub async fn run(cli: Cli) -> ExitCode {
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(err) => return handle_startup_error(&err),
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => {
            let err: BridgeError = err.into();
            return handle_startup_error(&err);
        }
    };

    let span = tracing::info_span!(
        "invocation",
        request_id = %Uuid::new_v4(),
        mode = cli.mode.as_str()
    );

    match dispatch(&cli, &config).instrument(span).await {
        Ok(document) => {
            output::emit(&document);
            ExitCode::SUCCESS
        }
        Err(err) => handle_error(&err),
    }
}

async fn dispatch(cli: &Cli, config: &Config) -> BridgeResult<serde_json::Value> {
    check_model_dir(config)?;

    let services = build_services(config, Arc::new(TracingLogger::new()));
    let limit = Duration::from_secs(config.timeouts.operation_secs);

    tokio::time::timeout(limit, execute_mode(cli, &services)).await.map_err(|_| {
        BridgeError::internal(format!(
            "{} timed out after {}s",
            cli.mode.as_str(),
            limit.as_secs()
        ))
    })?
}

async fn execute_mode(cli: &Cli, services: &Services) -> BridgeResult<serde_json::Value> {
    match cli.mode {
        Mode::GenerateQuestion => {
            let question =
                commands::generate_question::execute(&cli.selection, &services.questions).await?;
            Ok(serde_json::to_value(question)?)
        }
        Mode::AnalyzeResponse => {
            let report = commands::analyze_response::execute(
                &cli.selection,
                &cli.response,
                &services.evaluator,
            )
            .await?;
            Ok(serde_json::to_value(report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_error_keeps_first_line_only() {
        let err = Cli::try_parse_from(["interview-ai", "--mode", "explode"]).unwrap_err();
        let bridge = parse_error(&err);
        assert!(matches!(bridge, BridgeError::InputError(_)));
        let message = bridge.to_string();
        assert!(!message.contains('\n'));
        assert!(!message.starts_with("error:"));
        assert!(message.contains("explode"));
    }

    #[test]
    fn test_cli_overrides_win_over_config() {
        let args = ConfigArgs {
            file: None,
            model_dir: Some("/srv/models".into()),
            seed: Some(99),
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.model_dir.to_string_lossy(), "/srv/models");
        assert_eq!(config.seed, Some(99));
    }
}
