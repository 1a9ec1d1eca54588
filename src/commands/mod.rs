//! Command handlers

pub mod build;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use skeleton::application::Reporter;
use skeleton::config::{Config, ConfigWarning, CONFIG_FILE};
use skeleton::presentation::terminal::{detect_capabilities, use_color};
use skeleton::presentation::{create_event_sink, create_reporter, Cli, OutputOptions};

/// Everything a command needs after global flags are applied
pub struct Session {
    pub config: Config,
    pub reporter: Arc<Reporter>,
}

/// Load config, apply CLI overrides and build the reporter
pub fn start_session(
    cli: &Cli,
    command: &str,
    template: Option<String>,
    output: Option<PathBuf>,
) -> Result<Session> {
    let (mut config, warnings) = load_config(cli.config.as_deref())?;
    for warning in &warnings {
        print_warning(warning);
    }

    if let Some(template) = template {
        config.template = template;
    }
    if let Some(output) = output {
        config.output = output;
    }
    config.silent |= cli.silent;

    let output = OutputOptions {
        json: cli.json,
        color: use_color(cli.color, detect_capabilities()),
        timestamps: cli.verbose > 0,
    };
    let sink = create_event_sink(&config, output, command)?;
    let reporter = create_reporter(sink, config.silent);

    Ok(Session { config, reporter })
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = Config::load_with_warnings(path)?;
        return Ok((config.with_env_overrides(), warnings));
    }

    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let local = cwd.join(CONFIG_FILE);
    if local.is_file() {
        let (config, warnings) = Config::load_with_warnings(&local)?;
        return Ok((config.with_env_overrides(), warnings));
    }

    Ok((Config::load_or_default(Some(&cwd)), Vec::new()))
}

fn print_warning(warning: &ConfigWarning) {
    eprintln!("warning: {}", warning);
}
