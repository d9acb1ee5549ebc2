//! Assembler - 将有序音频片段组装为最终文件
//!
//! - 单个片段：直接移动为输出文件（不重新编码）
//! - 多个片段：交给 MediaConcatenatorPort 做流级拼接
//! - 多个 PCM 片段：没有容器，按顺序追加字节

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MediaConcatenatorPort;
use crate::domain::speech::AudioFormat;

/// 组装服务
pub struct Assembler {
    concatenator: Arc<dyn MediaConcatenatorPort>,
}

impl Assembler {
    pub fn new(concatenator: Arc<dyn MediaConcatenatorPort>) -> Self {
        Self { concatenator }
    }

    /// 拼接工具是否可用（多片段时在合成前检查）
    ///
    /// PCM 不经过拼接工具，直接通过
    pub fn check_available(&self, format: AudioFormat) -> Result<(), ApplicationError> {
        if format.is_raw() {
            return Ok(());
        }
        self.concatenator.check_available().map_err(Into::into)
    }

    /// 按顺序组装 `segments` 到 `output`
    ///
    /// 失败时不删除任何片段，错误中带上 `work_dir` 供排查
    pub async fn assemble(
        &self,
        segments: &[PathBuf],
        output: &Path,
        work_dir: &Path,
        format: AudioFormat,
    ) -> Result<(), ApplicationError> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                ApplicationError::assembly(
                    format!("Cannot create {}: {}", parent.display(), e),
                    work_dir,
                )
            })?;
        }

        match segments {
            [] => Err(ApplicationError::assembly("No audio segments to assemble", work_dir)),
            [single] => {
                move_file(single, output)
                    .await
                    .map_err(|e| ApplicationError::assembly(e.to_string(), work_dir))?;
                tracing::debug!(output = %output.display(), "Single segment moved to output");
                Ok(())
            }
            _ if format.is_raw() => {
                tracing::info!(segments = segments.len(), "Appending raw PCM chunks");
                append_files(segments, output)
                    .await
                    .map_err(|e| ApplicationError::assembly(e.to_string(), work_dir))
            }
            _ => {
                tracing::info!(segments = segments.len(), "Concatenating audio chunks");

                let concatenator = self.concatenator.clone();
                let segments = segments.to_vec();
                let output_path = output.to_path_buf();
                let work_path = work_dir.to_path_buf();
                tokio::task::spawn_blocking(move || {
                    concatenator.concat(&segments, &output_path, &work_path)
                })
                .await
                .map_err(|e| ApplicationError::assembly(e.to_string(), work_dir))?
                .map_err(|e| ApplicationError::assembly(e.to_string(), work_dir))?;

                Ok(())
            }
        }
    }
}

/// 移动文件；跨文件系统时 rename 会失败，退化为复制后删除
async fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match tokio::fs::rename(from, to).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!(error = %e, "Rename failed, copying instead");
            tokio::fs::copy(from, to).await?;
            tokio::fs::remove_file(from).await
        }
    }
}

/// 按顺序把各片段的字节写入 `to`
async fn append_files(segments: &[PathBuf], to: &Path) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut output = tokio::fs::File::create(to).await?;
    for segment in segments {
        let data = tokio::fs::read(segment).await?;
        output.write_all(&data).await?;
    }
    output.flush().await
}
