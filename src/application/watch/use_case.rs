//! Watch Use Case implementation

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use crate::application::compiler::Compiler;
use crate::application::reporter::Reporter;
use crate::domain::entities::{CompileResult, WatchSet};
use crate::domain::ports::{Event, EventKind, Field, FileSystem};
use crate::infrastructure::fs::LocalFs;

use super::options::{WatchOptions, CANCEL_CHECK_MS};

/// Something the poll loop can recompile
pub trait Rebuild {
    fn rebuild(&mut self) -> CompileResult;
}

impl<F: FileSystem> Rebuild for Compiler<F> {
    fn rebuild(&mut self) -> CompileResult {
        self.compile()
    }
}

/// What one poll iteration saw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollOutcome {
    /// Files whose mtime advanced
    pub modified: Vec<PathBuf>,
    /// Files that disappeared and were dropped from the watch set
    pub removed: Vec<PathBuf>,
    /// Result of the recompile, if one ran
    pub compiled: Option<CompileResult>,
}

impl PollOutcome {
    /// Nothing changed
    pub fn is_quiet(&self) -> bool {
        self.modified.is_empty() && self.removed.is_empty()
    }
}

/// Watch Use Case
///
/// Owns the watch set for one session. Compiles run on the caller's thread
/// through an exclusive borrow, so they never overlap.
pub struct WatchUseCase<F: FileSystem = LocalFs> {
    options: WatchOptions,
    fs: F,
    reporter: Arc<Reporter>,
    watched: WatchSet,
}

impl WatchUseCase<LocalFs> {
    pub fn new(options: WatchOptions, reporter: Arc<Reporter>) -> Self {
        Self::with_fs(options, LocalFs::new(), reporter)
    }
}

impl<F: FileSystem> WatchUseCase<F> {
    pub fn with_fs(options: WatchOptions, fs: F, reporter: Arc<Reporter>) -> Self {
        Self {
            options,
            fs,
            reporter,
            watched: WatchSet::new(),
        }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn watch_set(&self) -> &WatchSet {
        &self.watched
    }

    /// Walk every root breadth-first and rebuild the watch set
    pub fn discover(&mut self) {
        self.watched.clear();

        let ignored: Vec<PathBuf> = self
            .options
            .ignore
            .iter()
            .map(|path| self.fs.canonicalize(path))
            .collect();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut queue: VecDeque<PathBuf> = VecDeque::new();

        for root in &self.options.directories {
            if visited.insert(self.fs.canonicalize(root)) {
                self.announce_directory(root);
                queue.push_back(root.clone());
            }
        }

        while let Some(dir) = queue.pop_front() {
            let entries = match self.fs.read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => {
                    self.reporter.emit(Event::file(EventKind::ReadFailed, &dir));
                    continue;
                }
            };

            for entry in entries {
                if entry.is_dir {
                    if visited.insert(self.fs.canonicalize(&entry.path)) {
                        self.announce_directory(&entry.path);
                        queue.push_back(entry.path);
                    }
                    continue;
                }

                if ignored.contains(&self.fs.canonicalize(&entry.path)) {
                    continue;
                }

                match self.fs.modified(&entry.path) {
                    Ok(modified) => {
                        self.reporter.emit(Event::file(EventKind::Watching, &entry.path));
                        self.watched.record(entry.path, modified);
                    }
                    Err(_) => {
                        self.reporter.emit(Event::file(EventKind::ReadFailed, &entry.path));
                    }
                }
            }
        }
    }

    /// Check every watched file once, recompiling if any changed
    pub fn poll_once<C: Rebuild + ?Sized>(&mut self, compiler: &mut C) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        let snapshot: Vec<(PathBuf, SystemTime)> = self
            .watched
            .iter()
            .map(|(path, modified)| (path.to_path_buf(), modified))
            .collect();

        for (path, recorded) in snapshot {
            match self.fs.modified(&path) {
                Ok(current) if current > recorded => {
                    self.reporter.emit(Event::file(EventKind::FileModified, &path));
                    self.watched.record(path.clone(), current);
                    outcome.modified.push(path);
                }
                Ok(_) => {}
                Err(e) if e.is_not_found() => {
                    self.watched.remove(&path);
                    self.reporter.emit(Event::file(EventKind::FileNotFound, &path));
                    outcome.removed.push(path);
                }
                Err(_) => {
                    self.reporter.emit(Event::file(EventKind::ReadFailed, &path));
                }
            }
        }

        if !outcome.modified.is_empty() {
            outcome.compiled = Some(compiler.rebuild());
            self.reporter.emit(Event::new(EventKind::Polling));
        }

        outcome
    }

    /// Discover, then poll until `running` is cleared.
    ///
    /// Returns the number of recompiles.
    pub fn start<C: Rebuild + ?Sized>(
        &mut self,
        compiler: &mut C,
        running: Arc<AtomicBool>,
    ) -> usize {
        self.discover();
        self.reporter.emit(Event::new(EventKind::Polling));

        let mut compiles = 0;
        while running.load(Ordering::SeqCst) {
            if self.poll_once(compiler).compiled.is_some() {
                compiles += 1;
            }
            self.pause(&running);
        }

        self.reporter.emit(Event::new(EventKind::WatchStopped));
        compiles
    }

    /// Sleep one interval in short slices, waking early on cancellation
    fn pause(&self, running: &AtomicBool) {
        let deadline = Instant::now() + self.options.interval;
        let slice = Duration::from_millis(CANCEL_CHECK_MS);

        while running.load(Ordering::SeqCst) {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(slice.min(deadline - now));
        }
    }

    fn announce_directory(&self, dir: &Path) {
        let event = Event::new(EventKind::DirectoryFound).with(Field::Directory, dir.display());
        self.reporter.emit(event);
    }
}
