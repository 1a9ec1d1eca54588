//! JSON Event Sink
//!
//! Outputs events as NDJSON for scripting and editor integrations.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{Event, EventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: Option<String>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command: None,
        }
    }

    /// Tag every event with a `"command"` field
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// JSON object for `event`: `{"event": kind, <field>: value, ...}`
    pub fn to_value(&self, event: &Event) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("event".to_string(), serde_json::json!(event.kind.key()));
        if let Some(command) = &self.command {
            object.insert("command".to_string(), serde_json::json!(command));
        }
        for (field, value) in &event.fields {
            object.insert(field.key().to_string(), serde_json::json!(value));
        }
        serde_json::Value::Object(object)
    }
}

impl EventSink for JsonEventSink {
    fn on_event(&self, event: &Event) {
        let json = self.to_value(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}
