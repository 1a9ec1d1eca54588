//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{Compiler, Reporter, WatchUseCase};
use crate::config::Config;
use crate::domain::ports::{EventSink, FileSystem};
use crate::error::SkeletonResult;
use crate::infrastructure::{shell_directive, JsonEventSink, MessageTable};

use super::console::ConsoleEventSink;

/// How events are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// NDJSON instead of console text
    pub json: bool,
    pub color: bool,
    pub timestamps: bool,
}

/// Create the event sink for a command
pub fn create_event_sink(
    config: &Config,
    output: OutputOptions,
    command: &str,
) -> SkeletonResult<Arc<dyn EventSink>> {
    if output.json {
        return Ok(Arc::new(JsonEventSink::stdout().with_command(command)));
    }

    let table = match &config.messages.file {
        Some(file) => MessageTable::load(file)?,
        None => MessageTable::builtin(),
    };
    Ok(Arc::new(
        ConsoleEventSink::stdout(table)
            .with_color(output.color)
            .with_timestamps(output.timestamps),
    ))
}

/// Wrap a sink in a reporter honoring the configured silent flag
pub fn create_reporter(sink: Arc<dyn EventSink>, silent: bool) -> Arc<Reporter> {
    let reporter = Reporter::new(sink);
    reporter.set_silent(silent);
    Arc::new(reporter)
}

/// Create a compiler on the local disk with the configured directives
pub fn create_compiler(config: &Config, reporter: Arc<Reporter>) -> SkeletonResult<Compiler> {
    let mut compiler = Compiler::new(config.compile_options()?, reporter);
    register_directives(&mut compiler, config);
    Ok(compiler)
}

/// Register `[[before]]` and `[[after]]` shell commands, run from the config directory
pub fn register_directives<F: FileSystem>(compiler: &mut Compiler<F>, config: &Config) {
    let cwd = config.base_dir();
    for directive in &config.before {
        compiler.before_compiling(
            directive.name.clone(),
            shell_directive(directive.command.clone(), Some(cwd.clone())),
        );
    }
    for directive in &config.after {
        compiler.after_compiling(
            directive.name.clone(),
            shell_directive(directive.command.clone(), Some(cwd.clone())),
        );
    }
}

/// Create a watch use case on the local disk
pub fn create_watch_use_case(
    config: &Config,
    reporter: Arc<Reporter>,
) -> SkeletonResult<WatchUseCase> {
    Ok(WatchUseCase::new(config.watch_options()?, reporter))
}
