#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and the derived options must never panic
        if let Ok(config) = toml::from_str::<skeleton::Config>(content) {
            let _ = config.source_map();
            let _ = config.compile_options();
            let _ = config.watch_options();
        }
    }
});
