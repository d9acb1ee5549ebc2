//! Convert Commands - 文档转语音

use std::path::PathBuf;

/// 转换文档命令
///
/// 音色、模型、格式为原始字符串，由 handler 对照 Catalog 校验
#[derive(Debug, Clone)]
pub struct ConvertDocument {
    pub input: PathBuf,
    /// 缺省时为输入路径替换扩展名
    pub output: Option<PathBuf>,
    pub voice: Option<String>,
    pub model: Option<String>,
    pub format: Option<String>,
}

impl ConvertDocument {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            voice: None,
            model: None,
            format: None,
        }
    }
}
