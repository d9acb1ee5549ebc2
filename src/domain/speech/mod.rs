//! Speech Context - 语音合成限界上下文
//!
//! 职责:
//! - 音色、模型、音频格式值对象
//! - 允许列表（Catalog）与费用估算

mod catalog;
mod errors;
mod value_objects;

pub use catalog::{Catalog, PREVIEW_SAMPLE_TEXT};
pub use errors::CatalogError;
pub use value_objects::{AudioFormat, TtsModel, Voice};
