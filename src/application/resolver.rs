//! Include resolver
//!
//! Expands `@require('...')` directives left to right. An included file is
//! trimmed, fully expanded on its own, and then spliced in place of the
//! directive with every line after the first prefixed by the directive's
//! tab indentation. Missing, unreadable and cyclic includes are reported
//! and replaced by nothing.
//!
//! After each splice the scan restarts at the start of the spliced line, so
//! a directive completed by the text around an include is expanded too.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::domain::ports::{Event, EventKind, Field, FileSystem, FsError};
use crate::domain::value_objects::{IncludeDirective, SourceMap};

use super::lookup::{FileLookup, Lookup};
use super::reporter::PassLog;

/// Expands include directives against a source map
pub struct Resolver<'a> {
    lookup: FileLookup<'a>,
    fs: &'a dyn FileSystem,
}

impl<'a> Resolver<'a> {
    pub fn new(sources: &'a SourceMap, fs: &'a dyn FileSystem) -> Self {
        Self {
            lookup: FileLookup::new(sources, fs),
            fs,
        }
    }

    pub fn lookup(&self) -> &FileLookup<'a> {
        &self.lookup
    }

    /// Expand every directive in `text`.
    ///
    /// `origin` is the file `text` was read from; including it again is
    /// reported as a cycle.
    pub fn build(&self, text: &str, origin: Option<&Path>, log: &mut PassLog<'_>) -> String {
        let mut stack: Vec<PathBuf> = origin
            .map(|path| vec![self.fs.canonicalize(path)])
            .unwrap_or_default();
        self.expand(text, &mut stack, log)
    }

    /// Read `path`, reporting success or the kind of failure
    pub fn read(&self, path: &Path, log: &mut PassLog<'_>) -> Option<String> {
        match self.fs.read(path) {
            Ok(content) => {
                log.emit(Event::file(EventKind::ReadSuccessful, path));
                Some(content)
            }
            Err(FsError::NotFound(_)) => {
                log.emit(Event::file(EventKind::FileNotFound, path));
                None
            }
            Err(_) => {
                log.emit(Event::file(EventKind::ReadFailed, path));
                None
            }
        }
    }

    fn expand(&self, text: &str, stack: &mut Vec<PathBuf>, log: &mut PassLog<'_>) -> String {
        let mut text = text.to_string();
        let mut cursor = 0;
        let mut last: Option<Splice> = None;

        while let Some(directive) = IncludeDirective::find_from(&text, cursor) {
            // A directive formed across a splice may not re-enter the files that formed it
            let formers = last
                .filter(|splice| splice.touches(&directive.span))
                .map(|splice| splice.formers)
                .unwrap_or_default();

            let depth = stack.len();
            stack.extend(formers.iter().cloned());
            let (content, identity) = self.include(&directive, stack, log);
            stack.truncate(depth);

            let start = directive.span.start;
            text.replace_range(directive.span, &content);

            let mut formers = formers;
            formers.extend(identity);
            last = Some(Splice {
                range: start..start + content.len(),
                formers,
            });

            // Spliced content is fully expanded, so only directives formed
            // with the text around it can appear. They start on this line.
            cursor = text[..start].rfind('\n').map_or(0, |i| i + 1);
        }

        text
    }

    /// Expanded content for `directive` plus the identity of the file it came from
    fn include(
        &self,
        directive: &IncludeDirective,
        stack: &mut Vec<PathBuf>,
        log: &mut PassLog<'_>,
    ) -> (String, Option<PathBuf>) {
        log.emit(Event::new(EventKind::LookingFor).with(Field::Filename, &directive.identifier));

        let path = match self.lookup.find(&directive.identifier) {
            Lookup::Found(path) => path,
            Lookup::NotFound { relative } => {
                log.emit(Event::file(EventKind::FileNotFound, &relative));
                return (String::new(), None);
            }
            Lookup::UnregisteredExtension { relative, .. } => {
                log.emit(Event::file(EventKind::UnrecognizedExtension, &relative));
                return (String::new(), None);
            }
        };

        let identity = self.fs.canonicalize(&path);
        if stack.contains(&identity) {
            log.emit(Event::file(EventKind::CyclicInclude, &path));
            return (String::new(), None);
        }

        let Some(raw) = self.read(&path, log) else {
            return (String::new(), None);
        };

        stack.push(identity.clone());
        let expanded = self.expand(raw.trim(), stack, log);
        stack.pop();

        (reindent(&expanded, &directive.indentation()), Some(identity))
    }
}

/// Text most recently spliced in, and the files whose content built it
struct Splice {
    range: Range<usize>,
    formers: Vec<PathBuf>,
}

impl Splice {
    /// Whether `span` overlaps the splice, or straddles it when it is empty
    fn touches(&self, span: &Range<usize>) -> bool {
        if self.range.is_empty() {
            span.start < self.range.start && self.range.start < span.end
        } else {
            span.start < self.range.end && self.range.start < span.end
        }
    }
}

/// Prefix every line after the first with `indent`
pub fn reindent(content: &str, indent: &str) -> String {
    if indent.is_empty() {
        return content.to_string();
    }

    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::reporter::Reporter;
    use crate::infrastructure::events::MemoryEventSink;
    use crate::infrastructure::fs::MemoryFs;
    use std::sync::Arc;

    fn sources() -> SourceMap {
        SourceMap::new().with("html", ["/t"]).with("css", ["/s"])
    }

    fn build(fs: &MemoryFs, text: &str) -> (String, bool, Arc<MemoryEventSink>) {
        let sink = Arc::new(MemoryEventSink::new());
        let reporter = Reporter::new(sink.clone());
        let mut log = PassLog::new(&reporter);
        let sources = sources();
        let out = Resolver::new(&sources, fs).build(text, None, &mut log);
        (out, log.is_degraded(), sink)
    }

    #[test]
    fn text_without_directives_is_unchanged() {
        let fs = MemoryFs::new();
        let text = "<html>\n\t<body>plain</body>\n</html>\n";

        let (out, degraded, sink) = build(&fs, text);

        assert_eq!(out, text);
        assert!(!degraded);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn single_include_is_trimmed_and_spliced() {
        let fs = MemoryFs::new().with_file("/t/header.html", "\n  <h1>Hi</h1>  \n\n");

        let (out, degraded, _) = build(&fs, "<body>@require('header')</body>");

        assert_eq!(out, "<body><h1>Hi</h1></body>");
        assert!(!degraded);
    }

    #[test]
    fn lines_after_the_first_get_directive_tabs() {
        let fs = MemoryFs::new().with_file("/t/nav.html", "<ul>\n\t<li>a</li>\n</ul>");

        let (out, _, _) = build(&fs, "<body>\n\t\t@require('nav')\n</body>");

        assert_eq!(out, "<body>\n\t\t<ul>\n\t\t\t<li>a</li>\n\t\t</ul>\n</body>");
    }

    #[test]
    fn nested_includes_are_fully_inlined() {
        let fs = MemoryFs::new()
            .with_file("/t/a.html", "<a>\n\t@require('b')\n</a>")
            .with_file("/t/b.html", "<b>\n@require('c')\n</b>")
            .with_file("/t/c.html", "<c/>");

        let (out, degraded, _) = build(&fs, "\t@require('a')");

        assert_eq!(out, "\t<a>\n\t\t<b>\n\t\t<c/>\n\t\t</b>\n\t</a>");
        assert!(!out.contains("@require("));
        assert!(!degraded);
    }

    #[test]
    fn directive_completed_by_following_text_is_expanded() {
        let fs = MemoryFs::new()
            .with_file("/t/a.html", "@require('b")
            .with_file("/t/b.html", "B");

        let (out, degraded, _) = build(&fs, "@require('a')')");

        assert_eq!(out, "B");
        assert!(!degraded);
    }

    #[test]
    fn directive_started_by_preceding_text_is_expanded() {
        let fs = MemoryFs::new()
            .with_file("/t/x.html", "ire('y')")
            .with_file("/t/y.html", "Y");

        let (out, degraded, _) = build(&fs, "<p>\n<i>@requ@require('x')</i>");

        assert_eq!(out, "<p>\n<i>Y</i>");
        assert!(!degraded);
    }

    #[test]
    fn directive_formed_from_its_own_file_is_a_cycle() {
        let fs = MemoryFs::new().with_file("/t/a.html", "@require('a");

        let (out, degraded, sink) = build(&fs, "@require('a')')");

        assert_eq!(out, "");
        assert!(degraded);
        assert_eq!(sink.count(EventKind::CyclicInclude), 1);
    }

    #[test]
    fn alternating_formed_directives_terminate() {
        let fs = MemoryFs::new()
            .with_file("/t/a.html", "@require('b")
            .with_file("/t/b.html", "@require('a");

        let (out, degraded, sink) = build(&fs, "@require('a')')')");

        assert_eq!(out, "");
        assert!(degraded);
        assert_eq!(sink.count(EventKind::CyclicInclude), 1);
    }

    #[test]
    fn adjacent_includes_of_an_empty_file_are_not_a_cycle() {
        let fs = MemoryFs::new().with_file("/t/e.html", "");

        let (out, degraded, sink) = build(&fs, "@require('e')@require('e')");

        assert_eq!(out, "");
        assert!(!degraded);
        assert_eq!(sink.count(EventKind::ReadSuccessful), 2);
    }

    #[test]
    fn nested_directive_on_first_line_inherits_outer_tabs() {
        let fs = MemoryFs::new()
            .with_file("/t/b.html", "@require('c')\nafter")
            .with_file("/t/c.html", "c1\nc2");

        let (out, _, _) = build(&fs, "\t@require('b')");

        assert_eq!(out, "\tc1\n\tc2\n\tafter");
    }

    #[test]
    fn includes_expand_left_to_right() {
        let fs = MemoryFs::new()
            .with_file("/t/one.html", "1")
            .with_file("/t/two.html", "2");

        let (out, _, sink) = build(&fs, "@require('one')-@require('two')");

        assert_eq!(out, "1-2");
        let looked_for: Vec<_> = sink
            .events()
            .into_iter()
            .filter(|e| e.kind == EventKind::LookingFor)
            .filter_map(|e| e.field(Field::Filename).map(str::to_string))
            .collect();
        assert_eq!(looked_for, vec!["one", "two"]);
    }

    #[test]
    fn missing_include_becomes_empty_and_degrades() {
        let fs = MemoryFs::new();

        let (out, degraded, sink) = build(&fs, "[@require('ghost')]");

        assert_eq!(out, "[]");
        assert!(degraded);
        assert_eq!(sink.count(EventKind::FileNotFound), 1);
    }

    #[test]
    fn unregistered_extension_is_reported() {
        let fs = MemoryFs::new();
        let sources = SourceMap::new().with("css", ["/s"]);
        let sink = Arc::new(MemoryEventSink::new());
        let reporter = Reporter::new(sink.clone());
        let mut log = PassLog::new(&reporter);

        let out = Resolver::new(&sources, &fs).build("@require('page')", None, &mut log);

        assert_eq!(out, "");
        assert!(log.is_degraded());
        assert_eq!(sink.count(EventKind::UnrecognizedExtension), 1);
    }

    #[test]
    fn explicit_extension_uses_its_directories() {
        let fs = MemoryFs::new().with_file("/s/theme/dark.css", "body{}");

        let (out, _, _) = build(&fs, "<style>@require('theme.dark.css')</style>");

        assert_eq!(out, "<style>body{}</style>");
    }

    #[test]
    fn self_include_is_reported_as_cycle() {
        let fs = MemoryFs::new().with_file("/t/loop.html", "x@require('loop')y");

        let (out, degraded, sink) = build(&fs, "@require('loop')");

        assert_eq!(out, "xy");
        assert!(degraded);
        assert_eq!(sink.count(EventKind::CyclicInclude), 1);
    }

    #[test]
    fn mutual_include_is_reported_as_cycle() {
        let fs = MemoryFs::new()
            .with_file("/t/a.html", "A(@require('b'))")
            .with_file("/t/b.html", "B(@require('a'))");

        let (out, _, sink) = build(&fs, "@require('a')");

        assert_eq!(out, "A(B())");
        assert_eq!(sink.count(EventKind::CyclicInclude), 1);
    }

    #[test]
    fn origin_counts_as_part_of_the_cycle() {
        let fs = MemoryFs::new().with_file("/t/index.html", "@require('index')");
        let sources = sources();
        let reporter = Reporter::noop();
        let mut log = PassLog::new(&reporter);

        let out = Resolver::new(&sources, &fs).build(
            "@require('index')",
            Some(Path::new("/t/index.html")),
            &mut log,
        );

        assert_eq!(out, "");
        assert!(log.is_degraded());
    }

    #[test]
    fn same_file_twice_is_not_a_cycle() {
        let fs = MemoryFs::new().with_file("/t/hr.html", "<hr>");

        let (out, degraded, _) = build(&fs, "@require('hr')@require('hr')");

        assert_eq!(out, "<hr><hr>");
        assert!(!degraded);
    }

    #[test]
    fn reindent_leaves_first_line() {
        assert_eq!(reindent("a\nb\nc", "\t"), "a\n\tb\n\tc");
        assert_eq!(reindent("a\nb", ""), "a\nb");
        assert_eq!(reindent("single", "\t\t"), "single");
    }
}
