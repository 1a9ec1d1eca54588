//! Property tests for include resolution.

use std::sync::Arc;

use proptest::prelude::*;

use skeleton::application::{reindent, PassLog, Reporter, Resolver};
use skeleton::infrastructure::{MemoryEventSink, MemoryFs};
use skeleton::SourceMap;

fn plain_line() -> impl Strategy<Value = String> {
    // No '@' so no directive can appear by accident
    proptest::string::string_regex("[A-Za-z0-9 <>/=\"\t._-]{0,30}").unwrap()
}

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}").unwrap()
}

fn resolve(fs: &MemoryFs, text: &str) -> (String, bool) {
    let sink = Arc::new(MemoryEventSink::new());
    let reporter = Reporter::new(sink);
    let mut log = PassLog::new(&reporter);
    let sources = SourceMap::new().with("html", ["/site"]);
    let out = Resolver::new(&sources, fs).build(text, None, &mut log);
    (out, log.is_degraded())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text without directives passes through untouched.
    #[test]
    fn property_text_without_directives_is_identity(
        lines in proptest::collection::vec(plain_line(), 0..=10),
    ) {
        let text = lines.join("\n");
        let (out, degraded) = resolve(&MemoryFs::new(), &text);

        prop_assert_eq!(out, text);
        prop_assert!(!degraded);
    }

    /// PROPERTY: Every directive is consumed, whether or not its file exists.
    #[test]
    fn property_no_directive_survives(
        ids in proptest::collection::vec(identifier(), 1..=6),
        existing in proptest::collection::vec(any::<bool>(), 6),
        fillers in proptest::collection::vec(plain_line(), 7),
    ) {
        let fs = MemoryFs::new();
        let mut text = String::new();
        for (i, id) in ids.iter().enumerate() {
            if existing[i] {
                let path = format!("/site/{}.html", id.replace('.', "/"));
                fs.insert(path, &format!("body of {}", id), std::time::SystemTime::UNIX_EPOCH);
            }
            text.push_str(&fillers[i]);
            text.push_str(&format!("@require('{}')", id));
        }
        text.push_str(&fillers[ids.len()]);

        let (out, _) = resolve(&fs, &text);

        prop_assert!(!out.contains("@require("), "residual directive in {:?}", out);
    }

    /// PROPERTY: Included lines after the first carry exactly the directive's tabs.
    #[test]
    fn property_included_block_is_reindented(
        tabs in 0usize..4,
        lines in proptest::collection::vec("[a-z]{1,8}", 1..=6),
    ) {
        let fs = MemoryFs::new().with_file("/site/part.html", &lines.join("\n"));
        let indent = "\t".repeat(tabs);
        let text = format!("{}@require('part')", indent);

        let (out, degraded) = resolve(&fs, &text);

        prop_assert!(!degraded);
        let expected: Vec<String> = lines.iter().map(|l| format!("{}{}", indent, l)).collect();
        prop_assert_eq!(out, expected.join("\n"));
    }

    /// PROPERTY: Re-indenting never changes the line count or the first line.
    #[test]
    fn property_reindent_preserves_shape(
        lines in proptest::collection::vec(plain_line(), 1..=8),
        tabs in 0usize..4,
    ) {
        let content = lines.join("\n");
        let out = reindent(&content, &"\t".repeat(tabs));

        prop_assert_eq!(out.split('\n').count(), lines.len());
        prop_assert_eq!(out.split('\n').next(), Some(lines[0].as_str()));
    }
}
