#![no_main]

use libfuzzer_sys::fuzz_target;
use skeleton::domain::ports::{Event, EventKind, Field};
use skeleton::infrastructure::MessageTable;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // User message files are arbitrary TOML and rendering them must never panic
        if let Ok(table) = MessageTable::parse(content) {
            for kind in EventKind::ALL {
                let event = Event::new(kind)
                    .with(Field::Filename, "a.html")
                    .with(Field::Bytes, 1);
                let _ = table.render_plain(&event);
            }
        }
    }
});
