//! Named compile directives
//!
//! A directive is a zero-argument callback run before or after compiling.
//! Its returned string is reported as a directive response and never
//! changes the outcome of the pass.

use crate::domain::ports::{Event, EventKind, Field};

use super::reporter::PassLog;

/// Callback run around a compile pass
pub type Directive = Box<dyn FnMut() -> String + Send>;

/// Ordered name → directive registry
#[derive(Default)]
pub struct DirectiveRegistry {
    entries: Vec<(String, Directive)>,
}

impl DirectiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `directive` under `name`.
    ///
    /// Re-registering a name replaces the callback in its original position.
    pub fn register<F>(&mut self, name: impl Into<String>, directive: F)
    where
        F: FnMut() -> String + Send + 'static,
    {
        let name = name.into();
        let directive: Directive = Box::new(directive);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = directive,
            None => self.entries.push((name, directive)),
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        self.entries.len() != before
    }

    /// Names in execution order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every directive in order, announcing each with `fired`
    pub(crate) fn run_all(&mut self, fired: EventKind, log: &mut PassLog<'_>) {
        for (name, directive) in &mut self.entries {
            log.emit(Event::new(fired).with(Field::Directive, &*name));
            let response = directive();
            log.emit(Event::new(EventKind::DirectiveResponse).with(Field::Response, response));
        }
    }
}

impl std::fmt::Debug for DirectiveRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
