//! 应用层 - 命令
//!
//! 每次 CLI 调用对应一个命令

mod convert_commands;
mod preview_commands;

pub mod handlers;

pub use convert_commands::*;
pub use preview_commands::*;
