//! Domain Layer - 领域层
//!
//! - Speech Context: 音色、模型、格式与允许列表
//! - 文本分块器

pub mod speech;

mod chunker;

pub use chunker::{chunk_text, ChunkConfig, DEFAULT_MAX_CHUNK_CHARS};
