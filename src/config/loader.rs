//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SkeletonError, SkeletonResult};

use super::types::Config;

/// Project config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "skeleton.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths in the file are resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> SkeletonResult<(Config, Vec<ConfigWarning>)> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SkeletonError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SkeletonError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    config.resolve_paths(&base);

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(root) = project_root {
        let project_config = root.join(CONFIG_FILE);
        if project_config.is_file() {
            if let Ok(config) = Config::load(&project_config) {
                return with_env_overrides(config);
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            if let Ok(config) = Config::load(&user_config) {
                return with_env_overrides(config);
            }
        }
    }

    let mut config = Config::default();
    if let Some(root) = project_root {
        config.resolve_paths(root);
    }
    with_env_overrides(config)
}

/// `<config_dir>/skeleton/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("skeleton").join("config.toml"))
}

/// Apply environment variable overrides (SKELETON_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `var`
pub fn apply_overrides<V>(mut config: Config, var: V) -> Config
where
    V: Fn(&str) -> Option<String>,
{
    // SKELETON_OUTPUT
    if let Some(output) = var("SKELETON_OUTPUT").filter(|v| !v.trim().is_empty()) {
        let output = PathBuf::from(output.trim());
        config.output = match &config.base_dir {
            Some(base) if output.is_relative() => base.join(output),
            _ => output,
        };
    }

    // SKELETON_TEMPLATE
    if let Some(template) = var("SKELETON_TEMPLATE").filter(|v| !v.trim().is_empty()) {
        config.template = template.trim().to_string();
    }

    // SKELETON_SILENT
    if let Some(silent) = var("SKELETON_SILENT") {
        config.silent = !matches!(
            silent.trim().to_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        );
    }

    // SKELETON_WATCH_INTERVAL_MS; unparsable values are ignored
    if let Some(interval) = var("SKELETON_WATCH_INTERVAL_MS") {
        if let Ok(ms) = interval.trim().parse::<u64>() {
            config.watch.interval_ms = ms;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "template",
        "output",
        "silent",
        "sources",
        "watch",
        "directories",
        "interval_ms",
        "messages",
        "file",
        "before",
        "after",
        "name",
        "command",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
