//! File lookup
//!
//! Turns a dotted identifier such as `partials.header` or
//! `styles.main.css` into a file inside one of the source map's directories.
//!
//! Only a trailing token that is a registered extension counts as an
//! extension. Any other token is a path segment and `.html` is appended, so
//! `notes.txt` resolves to `notes/txt.html` unless `txt` is registered.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{SourceMap, DEFAULT_EXTENSION};

/// Identifier rebuilt as a relative path plus the extension used to pick directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPath {
    pub relative: PathBuf,
    pub extension: String,
}

/// Outcome of a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// First candidate that exists
    Found(PathBuf),
    /// No registered directory contains the file
    NotFound { relative: PathBuf },
    /// No directories are registered for the extension
    UnregisteredExtension { relative: PathBuf, extension: String },
}

impl Lookup {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Lookup::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Lookup::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Rebuild `identifier` as a relative path
pub fn logical_path(identifier: &str, sources: &SourceMap) -> LogicalPath {
    let (stem, extension) = match identifier.rsplit_once('.') {
        Some((stem, ext)) if sources.is_registered(ext) => (stem, Some(ext)),
        _ => (identifier, None),
    };

    let mut relative = stem.replace('.', &MAIN_SEPARATOR.to_string());
    let extension = extension.unwrap_or(DEFAULT_EXTENSION).to_string();
    relative.push('.');
    relative.push_str(&extension);

    LogicalPath {
        relative: PathBuf::from(relative),
        extension,
    }
}

/// Looks identifiers up in a source map
pub struct FileLookup<'a> {
    sources: &'a SourceMap,
    fs: &'a dyn FileSystem,
}

impl<'a> FileLookup<'a> {
    pub fn new(sources: &'a SourceMap, fs: &'a dyn FileSystem) -> Self {
        Self { sources, fs }
    }

    /// Find the file for `identifier`, first matching directory wins
    pub fn find(&self, identifier: &str) -> Lookup {
        let LogicalPath {
            relative,
            extension,
        } = logical_path(identifier, self.sources);

        let Some(directories) = self.sources.directories(&extension) else {
            return Lookup::UnregisteredExtension {
                relative,
                extension,
            };
        };

        let found = directories
            .iter()
            .map(|base| base.join(&relative))
            .find(|candidate| self.fs.is_file(candidate));

        match found {
            Some(path) => Lookup::Found(path),
            None => Lookup::NotFound { relative },
        }
    }
}
