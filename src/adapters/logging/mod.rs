pub mod memory;

pub use memory::{LogEntry, MemoryLogger};
