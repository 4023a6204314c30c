//! Domain layer for the interview bridge
//!
//! This module contains the interview vocabulary, error kinds and the port
//! traits collaborators implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{BridgeError, BridgeResult};
