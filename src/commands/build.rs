use std::path::PathBuf;

use anyhow::Result;

use skeleton::domain::ports::{Event, EventKind};
use skeleton::presentation::{create_compiler, Cli};

use super::start_session;

/// Compile once. Returns whether the output file was written.
pub fn cmd_build(cli: &Cli, template: Option<String>, output: Option<PathBuf>) -> Result<bool> {
    let session = start_session(cli, "build", template, output)?;
    session.reporter.emit(Event::new(EventKind::StartupBanner));

    let mut compiler = create_compiler(&session.config, session.reporter.clone())?;
    let result = compiler.compile();

    Ok(result.written)
}
