//! Configuration module for Skeleton
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SKELETON_*)
//! 3. Project config (skeleton.toml, or `--config`)
//! 4. User config (<config_dir>/skeleton/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, user_config_path, ConfigWarning, CONFIG_FILE};
pub use types::{Config, DirectiveConfig, MessagesConfig, SourceDirs, WatchConfig};
