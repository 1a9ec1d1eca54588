//! Event Sink Implementations
//!
//! Provides concrete implementations of EventSink:
//! - JsonEventSink: NDJSON output for scripting
//! - MemoryEventSink: collects events in memory
//!
//! The colored console sink lives in `presentation::console`.

mod json;
mod memory;

pub use json::JsonEventSink;
pub use memory::MemoryEventSink;
