//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod include_directive;
mod source_map;

pub use include_directive::{IncludeDirective, DIRECTIVE_CLOSE, DIRECTIVE_OPEN};
pub use source_map::{SourceMap, DEFAULT_EXTENSION};
