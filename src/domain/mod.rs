//! Domain Layer
//!
//! The core of Skeleton: include directives, source maps, compile results
//! and the watch set. No I/O happens here.
//!
//! ## Structure
//!
//! - `entities/` - Template, CompileResult, WatchSet
//! - `value_objects/` - SourceMap, IncludeDirective
//! - `ports/` - Interface definitions for infrastructure (file system, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
