//! Property tests for identifier lookup.

use std::path::{Component, Path};

use proptest::prelude::*;

use skeleton::application::{logical_path, FileLookup, Lookup};
use skeleton::infrastructure::MemoryFs;
use skeleton::SourceMap;

fn segment() -> impl Strategy<Value = String> {
    // Keep segments from colliding with the extensions under test
    "[a-z]{1,8}".prop_filter("not an extension", |s| {
        !matches!(s.as_str(), "html" | "css" | "txt")
    })
}

fn sources() -> SourceMap {
    SourceMap::new()
        .with("html", ["/views"])
        .with("css", ["/styles"])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Lookup never panics on arbitrary identifiers.
    #[test]
    fn property_lookup_never_panics(identifier in ".{0,40}") {
        let sources = sources();
        let fs = MemoryFs::new();
        let _ = FileLookup::new(&sources, &fs).find(&identifier);
    }

    /// PROPERTY: Dotted segments map to nested directories ending in a registered extension.
    #[test]
    fn property_logical_path_shape(
        segments in proptest::collection::vec(segment(), 1..=4),
        ext in prop_oneof![Just(None), Just(Some("css")), Just(Some("txt"))],
    ) {
        let mut identifier = segments.join(".");
        if let Some(ext) = ext {
            identifier.push('.');
            identifier.push_str(ext);
        }

        let logical = logical_path(&identifier, &sources());

        let expected_ext = if ext == Some("css") { "css" } else { "html" };
        prop_assert_eq!(&logical.extension, expected_ext);
        prop_assert_eq!(
            logical.relative.extension().and_then(|e| e.to_str()),
            Some(expected_ext)
        );

        // An unregistered trailing token is one more directory level
        let extra = usize::from(ext == Some("txt"));
        let depth = logical
            .relative
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .count();
        prop_assert_eq!(depth, segments.len() + extra);
    }

    /// PROPERTY: A file that exists under its logical path is always found there.
    #[test]
    fn property_existing_file_is_found(
        segments in proptest::collection::vec(segment(), 1..=4),
    ) {
        let identifier = segments.join(".");
        let expected = Path::new("/views").join(format!("{}.html", segments.join("/")));
        let fs = MemoryFs::new().with_file(expected.clone(), "x");
        let sources = sources();

        let found = FileLookup::new(&sources, &fs).find(&identifier);

        prop_assert_eq!(found, Lookup::Found(expected));
    }
}
