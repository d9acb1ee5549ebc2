//! Media Concatenator Port - 音频拼接抽象
//!
//! 流级拼接（不重新编码），外部工具同步调用

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConcatError {
    #[error("Concatenation tool unavailable: {0}")]
    Unavailable(String),

    #[error("Concatenation failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Media Concatenator Port
pub trait MediaConcatenatorPort: Send + Sync {
    /// 按顺序拼接 `segments`，写入 `output`
    ///
    /// `work_dir` 用于存放拼接过程中的辅助文件（如列表文件）
    fn concat(
        &self,
        segments: &[PathBuf],
        output: &Path,
        work_dir: &Path,
    ) -> Result<(), ConcatError>;

    /// 检查拼接工具是否可用
    fn check_available(&self) -> Result<(), ConcatError>;
}
