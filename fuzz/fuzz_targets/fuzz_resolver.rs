#![no_main]

use libfuzzer_sys::fuzz_target;
use skeleton::application::{PassLog, Reporter, Resolver};
use skeleton::infrastructure::MemoryFs;
use skeleton::SourceMap;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Both files hold the input, so @require('index') and @require('a') recurse
        let fs = MemoryFs::new()
            .with_file("/site/index.html", text)
            .with_file("/site/a.html", text);
        let sources = SourceMap::new().with("html", ["/site"]);
        let reporter = Reporter::noop();
        let mut log = PassLog::new(&reporter);

        let _ = Resolver::new(&sources, &fs).build(
            text,
            Some(std::path::Path::new("/site/index.html")),
            &mut log,
        );
    }
});
