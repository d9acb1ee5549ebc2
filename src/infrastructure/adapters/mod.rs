//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod concatenator;
pub mod converter;
pub mod storage;
pub mod tts;

pub use concatenator::*;
pub use converter::*;
pub use storage::*;
pub use tts::*;
