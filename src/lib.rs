//! Skeleton - a tiny templating engine
//!
//! Skeleton resolves `@require('partials.header')` includes in a root
//! template into a single output file, re-indenting included content to the
//! tabs in front of each directive, and can poll source directories to
//! rebuild whenever a file changes.
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects and ports (file system, event sink)
//! - `application` - Lookup, resolver, compile pipeline and watch loop
//! - `infrastructure` - Local and in-memory file systems, sinks, message table
//! - `presentation` - CLI definitions, console rendering and wiring
//! - `config` - `skeleton.toml` loading with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CompileOptions, Compiler, PollOutcome, Rebuild, Reporter, Resolver, WatchOptions,
    WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{CompileResult, Template, WatchSet};
pub use domain::ports::{Event, EventKind, EventSink, Field, FileSystem};
pub use domain::value_objects::{IncludeDirective, SourceMap};
pub use error::{SkeletonError, SkeletonResult};
