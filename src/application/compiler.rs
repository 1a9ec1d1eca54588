//! Compile pipeline
//!
//! One pass runs, in order and without branching back:
//!
//! 1. pre-compile directives
//! 2. load the root template
//! 3. resolve includes
//! 4. write the output file
//! 5. post-compile directives
//!
//! A missing root template stops the pass before step 4. Once step 4 is
//! reached the post-compile directives always run, whether or not the
//! write succeeded.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::{CompileResult, Template};
use crate::domain::ports::{Event, EventKind, Field, FileSystem};
use crate::domain::value_objects::SourceMap;
use crate::infrastructure::fs::LocalFs;

use super::directives::DirectiveRegistry;
use super::lookup::Lookup;
use super::reporter::{PassLog, Reporter};
use super::resolver::Resolver;

/// Root template identifier used when none is configured
pub const DEFAULT_TEMPLATE: &str = "index";
/// Output file used when none is configured
pub const DEFAULT_OUTPUT: &str = "compiled.html";

/// What to compile and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Root template identifier, looked up like any include
    pub template: String,
    /// Output file
    pub output: PathBuf,
    /// Extension → directories
    pub sources: SourceMap,
}

impl CompileOptions {
    pub fn new(template: impl Into<String>, sources: SourceMap) -> Self {
        Self {
            template: template.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sources,
        }
    }

    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, SourceMap::default())
    }
}

/// Compiles a root template into a single output file
pub struct Compiler<F: FileSystem = LocalFs> {
    options: CompileOptions,
    fs: F,
    reporter: Arc<Reporter>,
    before: DirectiveRegistry,
    after: DirectiveRegistry,
}

impl Compiler<LocalFs> {
    /// Compiler working on the local disk
    pub fn new(options: CompileOptions, reporter: Arc<Reporter>) -> Self {
        Self::with_fs(options, LocalFs::new(), reporter)
    }
}

impl<F: FileSystem> Compiler<F> {
    pub fn with_fs(options: CompileOptions, fs: F, reporter: Arc<Reporter>) -> Self {
        Self {
            options,
            fs,
            reporter,
            before: DirectiveRegistry::new(),
            after: DirectiveRegistry::new(),
        }
    }

    /// Register a directive run before each pass
    pub fn before_compiling<D>(&mut self, name: impl Into<String>, directive: D) -> &mut Self
    where
        D: FnMut() -> String + Send + 'static,
    {
        self.before.register(name, directive);
        self
    }

    /// Register a directive run after each pass that reached the output write
    pub fn after_compiling<D>(&mut self, name: impl Into<String>, directive: D) -> &mut Self
    where
        D: FnMut() -> String + Send + 'static,
    {
        self.after.register(name, directive);
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn pre_directives(&self) -> &DirectiveRegistry {
        &self.before
    }

    pub fn post_directives(&self) -> &DirectiveRegistry {
        &self.after
    }

    /// Run one full pass
    pub fn compile(&mut self) -> CompileResult {
        let started = Instant::now();
        let mut log = PassLog::new(&self.reporter);

        self.before.run_all(EventKind::PreDirective, &mut log);

        let resolver = Resolver::new(&self.options.sources, &self.fs);
        let Some(template) = load_template(&resolver, &self.options.template, &mut log) else {
            return CompileResult::aborted(started.elapsed());
        };

        let output = resolver.build(template.text(), Some(template.path()), &mut log);
        let result = write_output(&self.fs, &self.options, &output, started, &mut log);

        self.after.run_all(EventKind::PostDirective, &mut log);
        result
    }
}

fn load_template(
    resolver: &Resolver<'_>,
    identifier: &str,
    log: &mut PassLog<'_>,
) -> Option<Template> {
    let path = match resolver.lookup().find(identifier) {
        Lookup::Found(path) => path,
        Lookup::NotFound { relative } | Lookup::UnregisteredExtension { relative, .. } => {
            log.emit(Event::file(EventKind::FileNotFound, &relative));
            return None;
        }
    };

    let text = resolver.read(&path, log)?;
    Some(Template::new(path, text))
}

fn write_output(
    fs: &dyn FileSystem,
    options: &CompileOptions,
    output: &str,
    started: Instant,
    log: &mut PassLog<'_>,
) -> CompileResult {
    let written = fs.write(&options.output, output).is_ok();
    let elapsed = started.elapsed();

    if !written {
        log.emit(Event::file(EventKind::WriteFailed, &options.output));
    } else if log.is_degraded() {
        log.emit(Event::file(EventKind::WriteDegraded, &options.output));
    } else {
        log.emit(
            Event::file(EventKind::WriteSuccessful, &options.output)
                .with(Field::Bytes, output.len())
                .with(Field::Time, elapsed.as_millis()),
        );
    }

    CompileResult {
        bytes: if written { output.len() } else { 0 },
        elapsed,
        degraded: log.is_degraded(),
        written,
    }
}
