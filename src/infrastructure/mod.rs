//! Infrastructure layer module
//!
//! This module contains the process-level plumbing:
//! - Configuration management
//! - Logging infrastructure
//! - Service wiring from configuration

pub mod config;
pub mod logging;
pub mod setup;
