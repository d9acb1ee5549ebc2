//! Segment Storage - 文件系统片段存储实现
//!
//! 实现 SegmentStoragePort trait
//!
//! 目录结构：`{base_dir}/md2audio-{run_id}/segment_{index}.{ext}`

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{SegmentStorageError, SegmentStoragePort};
use crate::domain::speech::AudioFormat;

/// 运行目录前缀
const RUN_DIR_PREFIX: &str = "md2audio-";

/// 文件系统片段存储
pub struct FileSegmentStorage {
    /// 存储根目录（通常为系统临时目录）
    base_dir: PathBuf,
}

impl FileSegmentStorage {
    /// 创建新的片段存储
    ///
    /// 根目录转为绝对路径，片段路径会写入 ffmpeg 列表文件
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, SegmentStorageError> {
        let base_dir = std::path::absolute(base_dir.as_ref())
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }
}

#[async_trait]
impl SegmentStoragePort for FileSegmentStorage {
    fn run_dir(&self, run_id: Uuid) -> PathBuf {
        self.base_dir.join(format!("{}{}", RUN_DIR_PREFIX, run_id))
    }

    fn segment_path(&self, run_id: Uuid, index: usize, format: AudioFormat) -> PathBuf {
        self.run_dir(run_id)
            .join(format!("segment_{}.{}", index, format.extension()))
    }

    async fn save_segment(
        &self,
        run_id: Uuid,
        index: usize,
        format: AudioFormat,
        data: &[u8],
    ) -> Result<PathBuf, SegmentStorageError> {
        let run_dir = self.run_dir(run_id);

        fs::create_dir_all(&run_dir)
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        let segment_path = self.segment_path(run_id, index, format);

        fs::write(&segment_path, data)
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            run_id = %run_id,
            segment = index,
            size = data.len(),
            "Saved audio segment"
        );

        Ok(segment_path)
    }

    async fn delete_run(&self, run_id: Uuid) -> Result<u64, SegmentStorageError> {
        let run_dir = self.run_dir(run_id);

        if !run_dir.exists() {
            return Ok(0);
        }

        let mut deleted_count = 0u64;
        let mut entries = fs::read_dir(&run_dir)
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?
        {
            if entry.path().is_file() {
                fs::remove_file(entry.path())
                    .await
                    .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;
                deleted_count += 1;
            }
        }

        fs::remove_dir(&run_dir)
            .await
            .map_err(|e| SegmentStorageError::IoError(e.to_string()))?;

        tracing::debug!(run_id = %run_id, files = deleted_count, "Deleted run directory");

        Ok(deleted_count)
    }
}
