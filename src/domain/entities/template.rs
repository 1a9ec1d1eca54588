//! Root template loaded for a single compile pass

use std::path::{Path, PathBuf};

/// Root template text together with the file it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    path: PathBuf,
    text: String,
}

impl Template {
    pub fn new(path: PathBuf, text: String) -> Self {
        Self { path, text }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
