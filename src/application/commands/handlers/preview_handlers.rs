//! Preview Command Handler - 为音色生成试听样本

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::PreviewVoices;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechRequest, TtsEnginePort};
use crate::domain::speech::Catalog;

/// 预览响应
#[derive(Debug, Clone)]
pub struct PreviewVoicesResponse {
    /// 生成的样本文件，按音色顺序
    pub files: Vec<PathBuf>,
    pub estimated_cost: f64,
}

/// PreviewVoices Handler
pub struct PreviewVoicesHandler {
    catalog: Arc<Catalog>,
    tts_engine: Arc<dyn TtsEnginePort>,
}

impl PreviewVoicesHandler {
    pub fn new(catalog: Arc<Catalog>, tts_engine: Arc<dyn TtsEnginePort>) -> Self {
        Self {
            catalog,
            tts_engine,
        }
    }

    pub async fn handle(
        &self,
        command: PreviewVoices,
    ) -> Result<PreviewVoicesResponse, ApplicationError> {
        let voices = match command.voice.as_deref() {
            Some(name) => vec![self
                .catalog
                .voice(Some(name))
                .map_err(|e| ApplicationError::invalid_choice(e, &self.catalog.voice_names()))?],
            None => self.catalog.voices.clone(),
        };

        let estimated_cost = self.catalog.preview_cost(voices.len());
        tracing::info!(
            voices = voices.len(),
            model = %self.catalog.preview_model,
            estimated_cost = %format!("${:.4}", estimated_cost),
            "Generating voice samples"
        );

        tokio::fs::create_dir_all(&command.output_dir).await?;

        let mut files = Vec::with_capacity(voices.len());
        for voice in voices {
            tracing::info!(voice = %voice, description = voice.description(), "Generating sample");

            let response = self
                .tts_engine
                .synthesize(SpeechRequest {
                    text: self.catalog.preview_text.clone(),
                    voice,
                    model: self.catalog.preview_model,
                    format: self.catalog.preview_format,
                })
                .await?;

            let path = command
                .output_dir
                .join(self.catalog.preview_file_name(voice));
            tokio::fs::write(&path, &response.audio_data).await?;

            tracing::info!(path = %path.display(), "Sample saved");
            files.push(path);
        }

        Ok(PreviewVoicesResponse {
            files,
            estimated_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{SpeechResponse, TtsError};
    use crate::domain::speech::{AudioFormat, TtsModel, Voice, PREVIEW_SAMPLE_TEXT};
    use crate::infrastructure::adapters::FakeTtsClient;
    use tempfile::tempdir;

    fn handler(engine: Arc<FakeTtsClient>) -> PreviewVoicesHandler {
        PreviewVoicesHandler::new(Arc::new(Catalog::default()), engine)
    }

    #[tokio::test]
    async fn test_single_voice_writes_one_file() {
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(FakeTtsClient::with_defaults());

        let response = handler(engine.clone())
            .handle(PreviewVoices {
                voice: Some("onyx".to_string()),
                output_dir: temp_dir.path().to_path_buf(),
            })
            .await
            .unwrap();

        assert_eq!(response.files, vec![temp_dir.path().join("voice-sample-onyx.mp3")]);
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let requests = engine.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].voice, Voice::Onyx);
        assert_eq!(requests[0].model, TtsModel::HighDefinition);
        assert_eq!(requests[0].format, AudioFormat::Mp3);
        assert_eq!(requests[0].text, PREVIEW_SAMPLE_TEXT);
    }

    #[tokio::test]
    async fn test_all_voices_by_default() {
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(FakeTtsClient::with_defaults());

        let response = handler(engine.clone())
            .handle(PreviewVoices {
                voice: None,
                output_dir: temp_dir.path().to_path_buf(),
            })
            .await
            .unwrap();

        assert_eq!(response.files.len(), Voice::ALL.len());
        assert_eq!(engine.call_count(), Voice::ALL.len());
        for voice in Voice::ALL {
            let path = temp_dir.path().join(format!("voice-sample-{}.mp3", voice));
            assert!(path.exists(), "missing sample for {}", voice);
        }
        let expected = Catalog::default().preview_cost(Voice::ALL.len());
        assert!((response.estimated_cost - expected).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_unknown_voice_fails_before_any_call() {
        let temp_dir = tempdir().unwrap();
        let engine = Arc::new(FakeTtsClient::with_defaults());

        let result = handler(engine.clone())
            .handle(PreviewVoices {
                voice: Some("robot".to_string()),
                output_dir: temp_dir.path().to_path_buf(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_auth_failure_surfaces() {
        struct Rejecting;

        #[async_trait::async_trait]
        impl TtsEnginePort for Rejecting {
            async fn synthesize(&self, _request: SpeechRequest) -> Result<SpeechResponse, TtsError> {
                Err(TtsError::Unauthorized("HTTP 401 Unauthorized".to_string()))
            }
        }

        let temp_dir = tempdir().unwrap();
        let handler = PreviewVoicesHandler::new(Arc::new(Catalog::default()), Arc::new(Rejecting));
        let result = handler
            .handle(PreviewVoices {
                voice: Some("nova".to_string()),
                output_dir: temp_dir.path().to_path_buf(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::AuthError(_))));
        assert!(!temp_dir.path().join("voice-sample-nova.mp3").exists());
    }
}
