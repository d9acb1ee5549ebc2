//! Convert Command Handler
//!
//! 流程：校验 → 提取文本 → 分块 → 逐块合成并落盘 → 组装 → 清理

use futures_util::{stream, StreamExt, TryStreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::ConvertDocument;
use crate::application::error::ApplicationError;
use crate::application::ports::{SegmentStoragePort, SpeechRequest, TtsEnginePort};
use crate::application::services::{Assembler, TextExtractor};
use crate::domain::speech::{AudioFormat, Catalog, TtsModel, Voice};
use crate::domain::{chunk_text, ChunkConfig};

/// 转换参数
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub chunk: ChunkConfig,
    /// 同时进行的合成请求数，1 为严格顺序
    pub max_concurrent: usize,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            chunk: ChunkConfig::default(),
            max_concurrent: 1,
        }
    }
}

/// 转换响应
#[derive(Debug, Clone)]
pub struct ConvertDocumentResponse {
    pub output: PathBuf,
    pub characters: usize,
    pub chunks: usize,
    pub estimated_cost: f64,
}

/// ConvertDocument Handler
pub struct ConvertDocumentHandler {
    catalog: Arc<Catalog>,
    extractor: TextExtractor,
    assembler: Assembler,
    tts_engine: Arc<dyn TtsEnginePort>,
    segment_storage: Arc<dyn SegmentStoragePort>,
    settings: ConvertSettings,
}

impl ConvertDocumentHandler {
    pub fn new(
        catalog: Arc<Catalog>,
        extractor: TextExtractor,
        assembler: Assembler,
        tts_engine: Arc<dyn TtsEnginePort>,
        segment_storage: Arc<dyn SegmentStoragePort>,
        settings: ConvertSettings,
    ) -> Self {
        Self {
            catalog,
            extractor,
            assembler,
            tts_engine,
            segment_storage,
            settings,
        }
    }

    pub async fn handle(
        &self,
        command: ConvertDocument,
    ) -> Result<ConvertDocumentResponse, ApplicationError> {
        let catalog = &self.catalog;
        let format = catalog
            .format(command.format.as_deref())
            .map_err(|e| ApplicationError::invalid_choice(e, &catalog.format_names()))?;
        let voice = catalog
            .voice(command.voice.as_deref())
            .map_err(|e| ApplicationError::invalid_choice(e, &catalog.voice_names()))?;
        let model = catalog
            .model(command.model.as_deref())
            .map_err(|e| ApplicationError::invalid_choice(e, &catalog.model_names()))?;

        if !command.input.is_file() {
            return Err(ApplicationError::validation(format!(
                "File '{}' not found",
                command.input.display()
            )));
        }

        let output = command
            .output
            .unwrap_or_else(|| command.input.with_extension(format.extension()));

        tracing::info!(path = %command.input.display(), "Reading document");
        let text = self.extractor.extract(&command.input).await?;
        if text.trim().is_empty() {
            return Err(ApplicationError::validation(format!(
                "No text found in '{}'",
                command.input.display()
            )));
        }

        let characters = text.chars().count();
        let chunks = chunk_text(&text, &self.settings.chunk);

        if chunks.len() > 1 {
            self.assembler.check_available(format)?;
        }

        let estimated_cost = model.estimate_cost(characters);
        tracing::info!(
            characters = characters,
            estimated_cost = %format!("${:.4}", estimated_cost),
            chunks = chunks.len(),
            voice = %voice,
            model = %model,
            format = %format,
            "Converting document to speech"
        );

        let run_id = Uuid::new_v4();
        let run_dir = self.segment_storage.run_dir(run_id);

        let segments = match self
            .synthesize_all(run_id, &chunks, voice, model, format)
            .await
        {
            Ok(segments) => segments,
            Err(e) => {
                if let Err(cleanup) = self.segment_storage.delete_run(run_id).await {
                    tracing::warn!(
                        dir = %run_dir.display(),
                        error = %cleanup,
                        "Failed to remove segment directory"
                    );
                }
                return Err(e);
            }
        };

        if let Err(e) = self
            .assembler
            .assemble(&segments, &output, &run_dir, format)
            .await
        {
            tracing::error!(
                dir = %run_dir.display(),
                "Assembly failed, audio segments kept for inspection"
            );
            return Err(e);
        }

        if let Err(e) = self.segment_storage.delete_run(run_id).await {
            tracing::warn!(dir = %run_dir.display(), error = %e, "Failed to remove segment directory");
        }

        tracing::info!(output = %output.display(), "Conversion completed");

        Ok(ConvertDocumentResponse {
            output,
            characters,
            chunks: chunks.len(),
            estimated_cost,
        })
    }

    /// 按块顺序合成并保存，返回按顺序排列的片段路径
    ///
    /// 最多 `max_concurrent` 个请求同时进行，任一失败立即终止
    async fn synthesize_all(
        &self,
        run_id: Uuid,
        chunks: &[String],
        voice: Voice,
        model: TtsModel,
        format: AudioFormat,
    ) -> Result<Vec<PathBuf>, ApplicationError> {
        let total = chunks.len();

        stream::iter(chunks.iter().enumerate())
            .map(|(index, chunk)| async move {
                tracing::info!(
                    chunk = index + 1,
                    total = total,
                    chars = chunk.chars().count(),
                    "Synthesizing chunk"
                );

                let response = self
                    .tts_engine
                    .synthesize(SpeechRequest {
                        text: chunk.clone(),
                        voice,
                        model,
                        format,
                    })
                    .await?;

                let path = self
                    .segment_storage
                    .save_segment(run_id, index, format, &response.audio_data)
                    .await?;

                Ok::<PathBuf, ApplicationError>(path)
            })
            .buffered(self.settings.max_concurrent.max(1))
            .try_collect()
            .await
    }
}
