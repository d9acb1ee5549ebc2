//! Preview Commands - 音色试听

use std::path::PathBuf;

/// 生成音色样本命令
#[derive(Debug, Clone)]
pub struct PreviewVoices {
    /// 指定音色；缺省时生成所有音色
    pub voice: Option<String>,
    /// 样本输出目录
    pub output_dir: PathBuf,
}
