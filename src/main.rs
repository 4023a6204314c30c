//! Interview AI CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use interview_ai::cli::{self, Cli};
use interview_ai::BridgeError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return match err.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(io_err) => cli::handle_startup_error(&BridgeError::internal(format!(
                    "Failed to print usage: {io_err}"
                ))),
            };
        }
        Err(err) => return cli::handle_startup_error(&cli::parse_error(&err)),
    };

    cli::run(cli).await
}
