//! Event reporting
//!
//! [`Reporter`] forwards events to a sink unless it has been silenced.
//! [`PassLog`] wraps it for the duration of one compile pass and remembers
//! whether any failure was reported, even while silenced.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{Event, EventSink, NoopEventSink};

/// Sink plus the silent toggle
pub struct Reporter {
    sink: Arc<dyn EventSink>,
    silent: AtomicBool,
}

impl Reporter {
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            silent: AtomicBool::new(false),
        }
    }

    /// Reporter that drops everything
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopEventSink))
    }

    /// Resume emitting events
    pub fn report(&self) {
        self.silent.store(false, Ordering::SeqCst);
    }

    /// Stop emitting events. Control flow and results are unaffected.
    pub fn silence(&self) {
        self.silent.store(true, Ordering::SeqCst);
    }

    pub fn set_silent(&self, silent: bool) {
        self.silent.store(silent, Ordering::SeqCst);
    }

    pub fn is_silent(&self) -> bool {
        self.silent.load(Ordering::SeqCst)
    }

    pub fn emit(&self, event: Event) {
        if !self.is_silent() {
            self.sink.on_event(&event);
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::noop()
    }
}

/// Failure-tracking view of a [`Reporter`] for one compile pass
pub struct PassLog<'r> {
    reporter: &'r Reporter,
    failures: usize,
}

impl<'r> PassLog<'r> {
    pub fn new(reporter: &'r Reporter) -> Self {
        Self {
            reporter,
            failures: 0,
        }
    }

    pub fn emit(&mut self, event: Event) {
        if event.kind.is_failure() {
            self.failures += 1;
        }
        self.reporter.emit(event);
    }

    /// Number of failures reported so far
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn is_degraded(&self) -> bool {
        self.failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::EventKind;
    use crate::infrastructure::events::MemoryEventSink;

    #[test]
    fn silent_reporter_drops_events() {
        let sink = Arc::new(MemoryEventSink::new());
        let reporter = Reporter::new(sink.clone());

        reporter.silence();
        reporter.emit(Event::new(EventKind::Polling));
        assert!(sink.events().is_empty());

        reporter.report();
        reporter.emit(Event::new(EventKind::Polling));
        assert_eq!(sink.kinds(), vec![EventKind::Polling]);
    }

    #[test]
    fn pass_log_counts_failures_even_when_silent() {
        let sink = Arc::new(MemoryEventSink::new());
        let reporter = Reporter::new(sink.clone());
        reporter.silence();

        let mut log = PassLog::new(&reporter);
        log.emit(Event::new(EventKind::ReadSuccessful));
        assert!(!log.is_degraded());

        log.emit(Event::new(EventKind::FileNotFound));
        log.emit(Event::new(EventKind::ReadFailed));

        assert!(log.is_degraded());
        assert_eq!(log.failures(), 2);
        assert!(sink.events().is_empty());
    }
}
