//! Domain Entities

mod compile_result;
mod template;
mod watch_set;

pub use compile_result::CompileResult;
pub use template::Template;
pub use watch_set::WatchSet;
