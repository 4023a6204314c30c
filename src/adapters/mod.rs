//! Adapters implementing the domain ports.

pub mod analyzers;
pub mod continuation;
pub mod logging;
pub mod questions;
pub mod rng;
