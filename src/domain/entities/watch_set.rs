//! Watched files and their last observed modification times

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Path → last observed modification time.
///
/// Built fresh for every watch session and owned by the poll loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    files: BTreeMap<PathBuf, SystemTime>,
}

impl WatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `modified` as the last observed time for `path`
    pub fn record(&mut self, path: PathBuf, modified: SystemTime) {
        self.files.insert(path, modified);
    }

    /// Stop watching `path`. Returns the time that was recorded for it.
    pub fn remove(&mut self, path: &Path) -> Option<SystemTime> {
        self.files.remove(path)
    }

    pub fn get(&self, path: &Path) -> Option<SystemTime> {
        self.files.get(path).copied()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Watched entries, ordered by path
    pub fn iter(&self) -> impl Iterator<Item = (&Path, SystemTime)> {
        self.files.iter().map(|(p, t)| (p.as_path(), *t))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
