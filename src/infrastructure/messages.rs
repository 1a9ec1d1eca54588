//! Message table
//!
//! Human-readable wording for every [`EventKind`], loaded from TOML so text
//! can change without touching code. The built-in table ships with the crate
//! (`resources/messages.toml`); a user file overlays it key by key.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::ports::{Event, EventKind, Field, Tone};
use crate::error::{SkeletonError, SkeletonResult};

const BUILTIN_MESSAGES: &str = include_str!("../../resources/messages.toml");

/// Why a message table could not be parsed
#[derive(Debug, Error)]
pub enum MessageTableError {
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown event kind '{0}'")]
    UnknownKind(String),
}

/// Wording and tone for one event kind
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageTemplate {
    #[serde(default)]
    pub tone: Option<Tone>,
    pub text: String,
}

/// Rendered piece of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text from the template
    Literal(String),
    /// Substituted field value
    Value(String),
}

/// Event kind → message template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTable {
    templates: HashMap<EventKind, MessageTemplate>,
}

impl MessageTable {
    /// Table shipped with the crate
    pub fn builtin() -> Self {
        // The embedded resource is covered by tests; an empty table still renders kind names
        Self::parse(BUILTIN_MESSAGES).unwrap_or_default()
    }

    /// Parse a table from TOML text
    pub fn parse(content: &str) -> Result<Self, MessageTableError> {
        let raw: BTreeMap<String, MessageTemplate> = toml::from_str(content)?;

        let mut templates = HashMap::new();
        for (key, template) in raw {
            let kind = EventKind::from_key(&key).ok_or(MessageTableError::UnknownKind(key))?;
            templates.insert(kind, template);
        }
        Ok(Self { templates })
    }

    /// Built-in table overlaid with the entries from `path`
    pub fn load(path: &Path) -> SkeletonResult<Self> {
        let content = fs::read_to_string(path)?;
        let overrides = Self::parse(&content).map_err(|source| SkeletonError::InvalidMessages {
            file: path.to_path_buf(),
            source,
        })?;
        Ok(Self::builtin().overlay(overrides))
    }

    /// Replace entries with those present in `other`
    pub fn overlay(mut self, other: MessageTable) -> Self {
        self.templates.extend(other.templates);
        self
    }

    pub fn template(&self, kind: EventKind) -> Option<&MessageTemplate> {
        self.templates.get(&kind)
    }

    /// Tone for `kind`, falling back to the kind's default
    pub fn tone(&self, kind: EventKind) -> Tone {
        self.template(kind)
            .and_then(|t| t.tone)
            .unwrap_or_else(|| kind.default_tone())
    }

    /// Split the event's message into literal text and substituted values.
    ///
    /// Placeholders naming a field the event does not carry stay literal.
    pub fn render(&self, event: &Event) -> Vec<Segment> {
        let Some(template) = self.template(event.kind) else {
            return vec![Segment::Literal(event.kind.key().to_string())];
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template.text.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let value = after.find('}').and_then(|close| {
                Field::from_key(&after[..close])
                    .and_then(|field| event.field(field))
                    .map(|value| (close, value))
            });

            match value {
                Some((close, value)) => {
                    literal.push_str(&rest[..open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Value(value.to_string()));
                    rest = &after[close + 1..];
                }
                None => {
                    literal.push_str(&rest[..=open]);
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        segments
    }

    /// Render without any styling
    pub fn render_plain(&self, event: &Event) -> String {
        self.render(event)
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(s) | Segment::Value(s) => s,
            })
            .collect()
    }
}
