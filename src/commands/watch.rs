use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use skeleton::domain::ports::{Event, EventKind};
use skeleton::presentation::{create_compiler, create_watch_use_case, Cli};

use super::start_session;

/// Compile once, then poll until Ctrl+C
pub fn cmd_watch(
    cli: &Cli,
    template: Option<String>,
    output: Option<PathBuf>,
    interval: Option<u64>,
) -> Result<()> {
    let mut session = start_session(cli, "watch", template, output)?;
    if let Some(ms) = interval {
        session.config.watch.interval_ms = ms;
    }

    let mut compiler = create_compiler(&session.config, session.reporter.clone())?;
    let mut watch = create_watch_use_case(&session.config, session.reporter.clone())?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    session.reporter.emit(Event::new(EventKind::StartupBanner));
    compiler.compile();
    watch.start(&mut compiler, running);

    Ok(())
}
