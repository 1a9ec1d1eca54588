#![no_main]

use libfuzzer_sys::fuzz_target;
use skeleton::IncludeDirective;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Scanning must terminate and every span must slice cleanly
        let mut cursor = 0;
        while let Some(directive) = IncludeDirective::find_from(text, cursor) {
            assert!(text.get(directive.span.clone()).is_some());
            cursor = directive.span.end;
        }
    }
});
