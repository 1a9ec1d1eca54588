//! Application Layer
//!
//! Use cases that orchestrate the build.
//! This layer:
//! - Depends on Domain layer (value objects, entities, ports)
//! - Talks to the outside world only through ports
//!
//! ## Use Cases
//!
//! - `Compiler` - Pre-directives, template load, include resolution, write, post-directives
//! - `WatchUseCase` - Discovers watched files and polls them, recompiling on change
//!
//! ## Services
//!
//! - `FileLookup` - Maps a dotted identifier to a file on disk
//! - `Resolver` - Expands `@require('...')` directives
//! - `Reporter` - Forwards events to a sink unless silenced

pub mod compiler;
pub mod directives;
pub mod lookup;
pub mod reporter;
pub mod resolver;
pub mod watch;

pub use compiler::{CompileOptions, Compiler, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
pub use directives::{Directive, DirectiveRegistry};
pub use lookup::{logical_path, FileLookup, LogicalPath, Lookup};
pub use reporter::{PassLog, Reporter};
pub use resolver::{reindent, Resolver};
pub use watch::{
    PollOutcome, Rebuild, WatchOptions, WatchUseCase, CANCEL_CHECK_MS, DEFAULT_POLL_INTERVAL_MS,
};
