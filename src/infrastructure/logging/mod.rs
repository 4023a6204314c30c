//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting
//! - stderr or file output (never stdout)
//! - `Logger` port adapter over tracing

pub mod logger;
pub mod tracing_logger;

pub use logger::{LogFormat, LoggerImpl};
pub use tracing_logger::TracingLogger;
