//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod event_sink;
pub mod file_system;

pub use event_sink::{Event, EventKind, EventSink, Field, NoopEventSink, Tone};
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
