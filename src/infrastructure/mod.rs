//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Event sinks (JSON, Memory)
//! - `messages` - Data-driven message table
//! - `shell` - Shell-command directives

pub mod events;
pub mod fs;
pub mod messages;
pub mod shell;

// Re-export for convenience
pub use events::{JsonEventSink, MemoryEventSink};
pub use fs::{LocalFs, MemoryFs};
pub use messages::{MessageTable, MessageTableError, MessageTemplate, Segment};
pub use shell::shell_directive;
