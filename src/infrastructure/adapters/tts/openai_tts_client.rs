//! OpenAI TTS Client - 调用远程语音合成 HTTP 服务
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST {base_url}/audio/speech
//! Header: Authorization: Bearer {api_key}
//! Request: {"model": "...", "input": "...", "voice": "...", "response_format": "mp3"}  (JSON)
//! Response: 音频二进制

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};
use crate::domain::speech::{AudioFormat, TtsModel, Voice};

/// 语音合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechHttpRequest<'a> {
    model: TtsModel,
    input: &'a str,
    voice: Voice,
    response_format: AudioFormat,
}

/// OpenAI TTS 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiTtsClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI TTS 客户端
pub struct OpenAiTtsClient {
    client: Client,
    config: OpenAiTtsClientConfig,
    api_key: String,
}

impl OpenAiTtsClient {
    /// 创建新的客户端；凭据在构造时即要求提供
    pub fn new(config: OpenAiTtsClientConfig, api_key: impl Into<String>) -> Result<Self, TtsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TtsError::Unauthorized("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// 获取合成 URL
    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

/// 将非成功状态码映射为 TtsError
fn status_error(status: StatusCode, body: &str) -> TtsError {
    let message = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TtsError::Unauthorized(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => TtsError::Timeout,
        _ => TtsError::ServiceError(message),
    }
}

#[async_trait]
impl TtsEnginePort for OpenAiTtsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError> {
        let http_request = SpeechHttpRequest {
            model: request.model,
            input: &request.text,
            voice: request.voice,
            response_format: request.format,
        };

        tracing::debug!(
            url = %self.speech_url(),
            text_len = request.text.len(),
            voice = %request.voice,
            model = %request.model,
            format = %request.format,
            "Sending speech request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, &error_text));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio body".to_string()));
        }

        tracing::debug!(audio_size = audio_data.len(), "Speech synthesis completed");

        Ok(SpeechResponse {
            audio_data,
            format: request.format,
        })
    }
}
