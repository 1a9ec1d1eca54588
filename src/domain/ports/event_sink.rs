//! Event Port
//!
//! Every notable action during compiling and watching is reported as one
//! [`Event`] of a fixed taxonomy. Sinks decide how (and whether) to show it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kind of event emitted by the compiler or the watcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Output file written without failures
    WriteSuccessful,
    /// Source file read
    ReadSuccessful,
    /// No directories registered for the requested file's extension
    UnrecognizedExtension,
    /// Requested or watched file does not exist
    FileNotFound,
    /// Output file could not be written
    WriteFailed,
    /// Source file exists but could not be read
    ReadFailed,
    /// Pre-compile directive about to run
    PreDirective,
    /// Text returned by a directive
    DirectiveResponse,
    /// Greeting shown on startup
    StartupBanner,
    /// Include directive found, lookup starting
    LookingFor,
    /// Poll loop (re)started
    Polling,
    /// Directory discovered while building the watch set
    DirectoryFound,
    /// File added to the watch set
    Watching,
    /// Watched file has a newer modification time
    FileModified,
    /// Post-compile directive about to run
    PostDirective,
    /// Output written, but failures were reported during the pass
    WriteDegraded,
    /// Include would re-enter a file that is already being expanded
    CyclicInclude,
    /// Poll loop stopped
    WatchStopped,
}

impl EventKind {
    pub const ALL: [EventKind; 18] = [
        EventKind::WriteSuccessful,
        EventKind::ReadSuccessful,
        EventKind::UnrecognizedExtension,
        EventKind::FileNotFound,
        EventKind::WriteFailed,
        EventKind::ReadFailed,
        EventKind::PreDirective,
        EventKind::DirectiveResponse,
        EventKind::StartupBanner,
        EventKind::LookingFor,
        EventKind::Polling,
        EventKind::DirectoryFound,
        EventKind::Watching,
        EventKind::FileModified,
        EventKind::PostDirective,
        EventKind::WriteDegraded,
        EventKind::CyclicInclude,
        EventKind::WatchStopped,
    ];

    /// Stable snake_case key, used by the message table and JSON output
    pub fn key(self) -> &'static str {
        match self {
            EventKind::WriteSuccessful => "write_successful",
            EventKind::ReadSuccessful => "read_successful",
            EventKind::UnrecognizedExtension => "unrecognized_extension",
            EventKind::FileNotFound => "file_not_found",
            EventKind::WriteFailed => "write_failed",
            EventKind::ReadFailed => "read_failed",
            EventKind::PreDirective => "pre_directive",
            EventKind::DirectiveResponse => "directive_response",
            EventKind::StartupBanner => "startup_banner",
            EventKind::LookingFor => "looking_for",
            EventKind::Polling => "polling",
            EventKind::DirectoryFound => "directory_found",
            EventKind::Watching => "watching",
            EventKind::FileModified => "file_modified",
            EventKind::PostDirective => "post_directive",
            EventKind::WriteDegraded => "write_degraded",
            EventKind::CyclicInclude => "cyclic_include",
            EventKind::WatchStopped => "watch_stopped",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Failures mark the current compile pass as degraded
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            EventKind::UnrecognizedExtension
                | EventKind::FileNotFound
                | EventKind::WriteFailed
                | EventKind::ReadFailed
                | EventKind::CyclicInclude
        )
    }

    /// Tone used when the message table does not specify one
    pub fn default_tone(self) -> Tone {
        match self {
            EventKind::WriteSuccessful | EventKind::ReadSuccessful | EventKind::Watching => {
                Tone::Success
            }
            kind if kind.is_failure() => Tone::Failure,
            EventKind::DirectiveResponse
            | EventKind::FileModified
            | EventKind::WriteDegraded
            | EventKind::WatchStopped => Tone::Info,
            _ => Tone::Plain,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Named value substituted into an event's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Filename,
    Directory,
    Directive,
    Response,
    Bytes,
    Time,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Filename,
        Field::Directory,
        Field::Directive,
        Field::Response,
        Field::Bytes,
        Field::Time,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Filename => "filename",
            Field::Directory => "directory",
            Field::Directive => "directive",
            Field::Response => "response",
            Field::Bytes => "bytes",
            Field::Time => "time",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Presentation class of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Failure,
    Info,
    #[default]
    Plain,
}

/// A single structured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub fields: BTreeMap<Field, String>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            fields: BTreeMap::new(),
        }
    }

    /// Attach a field value
    pub fn with(mut self, field: Field, value: impl ToString) -> Self {
        self.fields.insert(field, value.to_string());
        self
    }

    /// Shorthand for events that only carry a file name
    pub fn file(kind: EventKind, path: &Path) -> Self {
        Self::new(kind).with(Field::Filename, path.display())
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

/// Trait for receiving events
///
/// Implementations:
/// - `ConsoleEventSink`: colored text through the message table
/// - `JsonEventSink`: NDJSON stream for scripting
/// - `MemoryEventSink`: collects events (tests)
/// - `NoopEventSink`: drops everything
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &Event);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: &Event) {}
}
