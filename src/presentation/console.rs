//! Console Event Sink
//!
//! Prints events as human-readable lines through the message table. Template
//! text is colored by the event's tone, substituted values stay plain.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Local;
use crossterm::style::Stylize;

use crate::domain::ports::{Event, EventSink};
use crate::infrastructure::messages::{MessageTable, Segment};

use super::theme::{colors, tone_color};

/// Event sink that prints to a terminal
pub struct ConsoleEventSink {
    table: MessageTable,
    color: bool,
    timestamps: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Console sink writing to stdout
    pub fn stdout(table: MessageTable) -> Self {
        Self::with_writer(table, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(table: MessageTable, writer: W) -> Self {
        Self {
            table,
            color: false,
            timestamps: false,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Prefix each message with the local time
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Text printed for `event`, without the trailing newline
    pub fn render(&self, event: &Event) -> String {
        let tone = tone_color(self.table.tone(event.kind)).filter(|_| self.color);
        let mut line = String::new();

        if self.timestamps {
            let stamp = Local::now().format("[%H:%M:%S]").to_string();
            if self.color {
                line.push_str(&stamp.with(colors::DIM).to_string());
            } else {
                line.push_str(&stamp);
            }
            line.push(' ');
        }

        for segment in self.table.render(event) {
            match (segment, tone) {
                (Segment::Literal(text), Some(color)) => {
                    line.push_str(&text.with(color).to_string())
                }
                (Segment::Literal(text), None) | (Segment::Value(text), _) => {
                    line.push_str(&text)
                }
            }
        }
        line
    }
}

impl EventSink for ConsoleEventSink {
    fn on_event(&self, event: &Event) {
        let line = self.render(event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
