//! Command Handlers 实现

mod convert_handlers;
mod preview_handlers;

pub use convert_handlers::*;
pub use preview_handlers::*;
