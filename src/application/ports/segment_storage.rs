//! Segment Storage Port - 出站端口
//!
//! 单次运行内音频片段的临时存储。每次运行使用独立目录，
//! 成功后整体删除，拼接失败时保留以便人工恢复。

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::speech::AudioFormat;

/// 片段存储错误
#[derive(Debug, Error)]
pub enum SegmentStorageError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Segment Storage Port - 出站端口
#[async_trait]
pub trait SegmentStoragePort: Send + Sync {
    /// 获取运行的片段目录
    fn run_dir(&self, run_id: Uuid) -> PathBuf;

    /// 获取片段文件路径
    fn segment_path(&self, run_id: Uuid, index: usize, format: AudioFormat) -> PathBuf;

    /// 保存片段数据
    async fn save_segment(
        &self,
        run_id: Uuid,
        index: usize,
        format: AudioFormat,
        data: &[u8],
    ) -> Result<PathBuf, SegmentStorageError>;

    /// 删除运行目录及其所有片段，返回删除的文件数
    async fn delete_run(&self, run_id: Uuid) -> Result<u64, SegmentStorageError>;
}
