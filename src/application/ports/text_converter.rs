//! Text Converter Port - 文档格式转换抽象
//!
//! 将 markdown 文档转换为纯文本（外部转换器，同步调用）

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// 转换器不存在或无法启动
    #[error("Converter unavailable: {0}")]
    Unavailable(String),

    /// 转换器以非零状态退出
    #[error("Converter failed: {0}")]
    Failed(String),
}

/// Text Converter Port
pub trait TextConverterPort: Send + Sync {
    /// 将文档转换为纯文本
    fn to_plain_text(&self, document: &Path) -> Result<String, ConvertError>;
}
