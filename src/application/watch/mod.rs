//! Watch Use Case
//!
//! Polls source directories and recompiles when a watched file changes:
//! - Discovery: breadth-first walk of every root, recording each file's mtime
//! - Polling: fixed interval, one recompile per iteration however many files changed
//! - Graceful Ctrl+C shutdown through a shared running flag
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(vec![PathBuf::from("templates")]);
//! let mut watch = WatchUseCase::new(options, reporter);
//! watch.start(&mut compiler, running);
//! ```

mod options;
mod use_case;


pub use options::{WatchOptions, CANCEL_CHECK_MS, DEFAULT_POLL_INTERVAL_MS};
pub use use_case::{PollOutcome, Rebuild, WatchUseCase};
