//! Source map value object
//!
//! Maps a file extension to the ordered list of base directories that are
//! searched for files of that extension.

use std::path::PathBuf;

/// Extension assumed when an identifier carries no registered extension
pub const DEFAULT_EXTENSION: &str = "html";

/// Extension → candidate base directories.
///
/// Extensions are unique keys. Directories keep insertion order, and lookup
/// across them is first-match-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceEntry {
    extension: String,
    directories: Vec<PathBuf>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the base directories for an extension.
    ///
    /// A leading dot on the extension is ignored. Registering an extension a
    /// second time replaces its directories but keeps its original position.
    pub fn insert<I, P>(&mut self, extension: &str, directories: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let extension = normalize_extension(extension);
        let directories: Vec<PathBuf> = directories.into_iter().map(Into::into).collect();

        match self.entries.iter_mut().find(|e| e.extension == extension) {
            Some(entry) => entry.directories = directories,
            None => self.entries.push(SourceEntry {
                extension,
                directories,
            }),
        }
    }

    /// Builder variant of [`SourceMap::insert`]
    pub fn with<I, P>(mut self, extension: &str, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.insert(extension, directories);
        self
    }

    /// Whether `extension` has been registered
    pub fn is_registered(&self, extension: &str) -> bool {
        self.directories(extension).is_some()
    }

    /// Base directories for `extension`, in lookup order
    pub fn directories(&self, extension: &str) -> Option<&[PathBuf]> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.entries
            .iter()
            .find(|e| e.extension == extension)
            .map(|e| e.directories.as_slice())
    }

    /// Registered extensions in registration order
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.extension.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.strip_prefix('.').unwrap_or(extension).to_string()
}
