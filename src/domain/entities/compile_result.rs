//! Outcome of a compile pass

use std::time::Duration;

/// Result of one compile pass.
///
/// A pass is degraded when any lookup, read or write failure was reported
/// while it ran. Degraded passes still write their output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileResult {
    /// Bytes written to the output file
    pub bytes: usize,
    /// Wall-clock time from the start of the pass to the output write
    pub elapsed: Duration,
    /// Whether any failure was reported during the pass
    pub degraded: bool,
    /// Whether the output file was written
    pub written: bool,
}

impl CompileResult {
    /// Pass stopped before writing (root template missing or unreadable)
    pub fn aborted(elapsed: Duration) -> Self {
        Self {
            bytes: 0,
            elapsed,
            degraded: true,
            written: false,
        }
    }

    /// Output written and no failure reported
    pub fn is_clean(&self) -> bool {
        self.written && !self.degraded
    }
}
