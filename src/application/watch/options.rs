//! Watch options

use std::path::PathBuf;
use std::time::Duration;

/// Default time between polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Longest the loop sleeps before checking the running flag
pub const CANCEL_CHECK_MS: u64 = 50;

/// Options for the watch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    /// Root directories, walked recursively
    pub directories: Vec<PathBuf>,
    /// Time between polls
    pub interval: Duration,
    /// Files never added to the watch set (the compile output)
    pub ignore: Vec<PathBuf>,
}

impl WatchOptions {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self {
            directories,
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            ignore: Vec::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Never watch `path`
    pub fn with_ignored(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore.push(path.into());
        self
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
