//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the resolver, compiler and watcher run against the local disk or an
//! in-memory stand-in.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error, keeping the path it happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

/// Entry returned by [`FileSystem::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MemoryFs` - in-memory for testing
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// Last modification time
    fn modified(&self, path: &Path) -> FsResult<SystemTime>;

    /// Entries of a directory, sorted by path, without `.` and `..`
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Stable identity for `path`, used to detect include cycles
    fn canonicalize(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
