//! Output formatting for the CLI.
//!
//! Stdout carries exactly one compact JSON document per invocation.

use serde::Serialize;
use serde_json::json;

use crate::domain::errors::BridgeError;

/// Render `value` as the single result document.
pub fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        render_error(&BridgeError::internal(format!("failed to encode result: {e}")))
    })
}

/// Render the `{"error": ...}` document for `err`.
pub fn render_error(err: &BridgeError) -> String {
    json!({ "error": err.to_string() }).to_string()
}

pub fn emit<T: Serialize>(value: &T) {
    println!("{}", render(value));
}

pub fn emit_error(err: &BridgeError) {
    println!("{}", render_error(err));
}
