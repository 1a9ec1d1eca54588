//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{
    CompileOptions, WatchOptions, DEFAULT_OUTPUT, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TEMPLATE,
};
use crate::domain::value_objects::{SourceMap, DEFAULT_EXTENSION};
use crate::error::{SkeletonError, SkeletonResult};

use super::loader::{self, ConfigWarning};

/// Directories for one extension.
///
/// Accepts a single path or a list:
///   [sources]
///   html = "templates"
///   css = ["styles", "vendor/styles"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceDirs {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl SourceDirs {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            SourceDirs::One(path) => std::slice::from_ref(path),
            SourceDirs::Many(paths) => paths,
        }
    }

    fn paths_mut(&mut self) -> &mut [PathBuf] {
        match self {
            SourceDirs::One(path) => std::slice::from_mut(path),
            SourceDirs::Many(paths) => paths,
        }
    }
}

/// A named shell command run before or after compiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveConfig {
    pub name: String,
    pub command: String,
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Roots to watch; empty means every source directory
    #[serde(default)]
    pub directories: Vec<PathBuf>,

    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

/// Message table override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root template identifier
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Start with event output suppressed
    #[serde(default)]
    pub silent: bool,

    /// Extension → directories; empty means `html` files next to the config
    #[serde(default)]
    pub sources: BTreeMap<String, SourceDirs>,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub before: Vec<DirectiveConfig>,

    #[serde(default)]
    pub after: Vec<DirectiveConfig>,

    /// Directory relative paths were resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            silent: false,
            sources: BTreeMap::new(),
            watch: WatchConfig::default(),
            messages: MessagesConfig::default(),
            before: Vec::new(),
            after: Vec::new(),
            base_dir: None,
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SkeletonResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> SkeletonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply `SKELETON_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Make every relative path absolute against `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        self.output = absolutize(base, &self.output);
        for dirs in self.sources.values_mut() {
            for path in dirs.paths_mut() {
                *path = absolutize(base, path);
            }
        }
        for dir in &mut self.watch.directories {
            *dir = absolutize(base, dir);
        }
        if let Some(file) = &self.messages.file {
            self.messages.file = Some(absolutize(base, file));
        }
        self.base_dir = Some(base.to_path_buf());
    }

    /// Directory commands run in and defaults are relative to
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn source_map(&self) -> SkeletonResult<SourceMap> {
        let mut map = SourceMap::new();
        if self.sources.is_empty() {
            map.insert(DEFAULT_EXTENSION, [self.base_dir()]);
            return Ok(map);
        }

        for (extension, dirs) in &self.sources {
            let normalized = extension.trim().trim_start_matches('.');
            if normalized.is_empty() {
                return Err(SkeletonError::InvalidValue {
                    key: "sources".to_string(),
                    message: "extension must not be empty".to_string(),
                });
            }
            if dirs.paths().is_empty() {
                return Err(SkeletonError::InvalidValue {
                    key: format!("sources.{}", normalized),
                    message: "at least one directory is required".to_string(),
                });
            }
            map.insert(normalized, dirs.paths().iter().cloned());
        }
        Ok(map)
    }

    pub fn compile_options(&self) -> SkeletonResult<CompileOptions> {
        if self.template.trim().is_empty() {
            return Err(SkeletonError::InvalidValue {
                key: "template".to_string(),
                message: "template identifier must not be empty".to_string(),
            });
        }
        Ok(CompileOptions::new(self.template.trim(), self.source_map()?)
            .with_output(self.output.clone()))
    }

    /// Watch roots default to every source directory; the output file is never watched
    pub fn watch_options(&self) -> SkeletonResult<WatchOptions> {
        if self.watch.interval_ms == 0 {
            return Err(SkeletonError::InvalidValue {
                key: "watch.interval_ms".to_string(),
                message: "interval must be greater than zero".to_string(),
            });
        }

        let directories = if self.watch.directories.is_empty() {
            let sources = self.source_map()?;
            let mut roots: Vec<PathBuf> = Vec::new();
            for extension in sources.extensions() {
                for dir in sources.directories(extension).unwrap_or_default() {
                    if !roots.contains(dir) {
                        roots.push(dir.clone());
                    }
                }
            }
            roots
        } else {
            self.watch.directories.clone()
        };

        Ok(WatchOptions::new(directories)
            .with_interval(Duration::from_millis(self.watch.interval_ms))
            .with_ignored(self.output.clone()))
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
