//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Console rendering of events
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `console` - Colored, message-table driven event sink
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `terminal` / `theme` - Color detection and palette
//!
//! ## Usage
//!
//! ```ignore
//! use skeleton::presentation::factory;
//!
//! let reporter = factory::create_reporter(sink, config.silent);
//! let mut compiler = factory::create_compiler(&config, reporter)?;
//! let result = compiler.compile();
//! ```

pub mod cli;
pub mod console;
pub mod factory;
pub mod terminal;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use console::ConsoleEventSink;
pub use factory::{
    create_compiler, create_event_sink, create_reporter, create_watch_use_case, OutputOptions,
};
