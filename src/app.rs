//! 应用组装
//!
//! 根据配置创建适配器并注入到 handler，执行一次 CLI 命令

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::handlers::{
    ConvertDocumentHandler, ConvertSettings, PreviewVoicesHandler,
};
use crate::application::commands::PreviewVoices;
use crate::application::error::ApplicationError;
use crate::application::ports::TtsEnginePort;
use crate::application::services::{Assembler, TextExtractor};
use crate::cli::CliCommand;
use crate::config::AppConfig;
use crate::domain::speech::Catalog;
use crate::domain::ChunkConfig;
use crate::infrastructure::adapters::{
    FfmpegConcatenator, FileSegmentStorage, OpenAiTtsClient, OpenAiTtsClientConfig,
    PandocConverter,
};

/// 命令执行结果
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Converted { output: PathBuf },
    Previewed { files: Vec<PathBuf> },
}

/// 组装完成的应用
pub struct App {
    convert: ConvertDocumentHandler,
    preview: PreviewVoicesHandler,
    preview_dir: PathBuf,
}

/// 读取 API Key，缺失或为空时返回 DependencyMissing
pub fn require_api_key(
    var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ApplicationError> {
    match lookup(var) {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ApplicationError::dependency_missing(format!(
            "{} environment variable not set",
            var
        ))),
    }
}

/// 使用 OpenAI 客户端组装应用；凭据在任何其他工作之前检查
pub async fn build_app(
    config: &AppConfig,
    lookup_env: impl Fn(&str) -> Option<String>,
) -> Result<App, ApplicationError> {
    let api_key = require_api_key(&config.tts.api_key_env, lookup_env)?;

    let client_config = OpenAiTtsClientConfig::new(&config.tts.base_url)
        .with_timeout(config.tts.timeout_secs);
    let engine = OpenAiTtsClient::new(client_config, api_key)?;

    build_app_with_engine(config, Arc::new(engine)).await
}

/// 使用给定的 TTS 引擎组装应用
pub async fn build_app_with_engine(
    config: &AppConfig,
    tts_engine: Arc<dyn TtsEnginePort>,
) -> Result<App, ApplicationError> {
    let catalog = Arc::new(Catalog::default());
    let segment_storage =
        Arc::new(FileSegmentStorage::new(config.storage.effective_temp_dir()).await?);

    let extractor = TextExtractor::new(Arc::new(PandocConverter::new(&config.tools.pandoc)));
    let assembler = Assembler::new(Arc::new(FfmpegConcatenator::new(&config.tools.ffmpeg)));

    let settings = ConvertSettings {
        chunk: ChunkConfig {
            max_chars: config.synthesis.max_chunk_chars,
        },
        max_concurrent: config.synthesis.max_concurrent,
    };

    let convert = ConvertDocumentHandler::new(
        catalog.clone(),
        extractor,
        assembler,
        tts_engine.clone(),
        segment_storage,
        settings,
    );
    let preview = PreviewVoicesHandler::new(catalog, tts_engine);

    Ok(App {
        convert,
        preview,
        preview_dir: config.preview.output_dir.clone(),
    })
}

impl App {
    pub async fn run(&self, command: CliCommand) -> Result<RunOutcome, ApplicationError> {
        match command {
            CliCommand::Convert(convert) => {
                let response = self.convert.handle(convert).await?;
                Ok(RunOutcome::Converted {
                    output: response.output,
                })
            }
            CliCommand::Preview { voice } => {
                let response = self
                    .preview
                    .handle(PreviewVoices {
                        voice,
                        output_dir: self.preview_dir.clone(),
                    })
                    .await?;
                Ok(RunOutcome::Previewed {
                    files: response.files,
                })
            }
        }
    }
}
