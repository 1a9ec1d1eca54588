//! In-memory File System
//!
//! Implements the FileSystem port on top of a map. Modification times are
//! explicit so poll behaviour can be exercised without sleeping.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
struct MemoryFile {
    content: String,
    modified: SystemTime,
}

/// In-memory file system
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, MemoryFile>>,
    read_only: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a file with modification time `UNIX_EPOCH`
    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.insert(path, content, SystemTime::UNIX_EPOCH);
        self
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, content: &str, modified: SystemTime) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(
                path.into(),
                MemoryFile {
                    content: content.to_string(),
                    modified,
                },
            );
        }
    }

    /// Advance a file's modification time by `by`
    pub fn touch(&self, path: &Path, by: Duration) {
        if let Ok(mut files) = self.files.lock() {
            if let Some(file) = files.get_mut(path) {
                file.modified += by;
            }
        }
    }

    pub fn remove(&self, path: &Path) {
        if let Ok(mut files) = self.files.lock() {
            files.remove(path);
        }
    }

    /// Make writes to `path` fail with permission denied
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        if let Ok(mut read_only) = self.read_only.lock() {
            read_only.insert(path.into());
        }
    }

    /// Content of a file, if present
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(path).map(|f| f.content.clone()))
    }

    fn is_dir(files: &BTreeMap<PathBuf, MemoryFile>, path: &Path) -> bool {
        files.keys().any(|p| p != path && p.starts_with(path))
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        let files = self
            .files
            .lock()
            .map_err(|e| FsError::Other(e.to_string()))?;
        files
            .get(path)
            .map(|f| f.content.clone())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let denied = self
            .read_only
            .lock()
            .map(|r| r.contains(path))
            .unwrap_or(false);
        if denied {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let modified = SystemTime::now();
        self.insert(path, content, modified);
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files
            .lock()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn modified(&self, path: &Path) -> FsResult<SystemTime> {
        let files = self
            .files
            .lock()
            .map_err(|e| FsError::Other(e.to_string()))?;
        files
            .get(path)
            .map(|f| f.modified)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let files = self
            .files
            .lock()
            .map_err(|e| FsError::Other(e.to_string()))?;
        if !Self::is_dir(&files, path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }

        let mut children: BTreeMap<PathBuf, bool> = BTreeMap::new();
        for file in files.keys() {
            let Ok(rest) = file.strip_prefix(path) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let child = path.join(first);
            let nested = components.next().is_some();
            *children.entry(child).or_insert(false) |= nested;
        }

        Ok(children
            .into_iter()
            .map(|(path, is_dir)| DirEntry { path, is_dir })
            .collect())
    }
}
