//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不调用远程服务，返回 `header + 文本字节` 作为音频数据，
//! 并记录每次请求，便于断言调用次数和顺序

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeTtsClientConfig {
    /// 每段音频前附加的固定字节
    pub header: Vec<u8>,
    /// 第 N 次调用（从 1 开始）返回错误
    pub fail_on_call: Option<usize>,
    /// 模拟推理延迟（毫秒）
    pub delay_ms: u64,
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    calls: AtomicUsize,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTtsClientConfig::default())
    }

    /// 第 `call` 次调用失败
    pub fn failing_on(call: usize) -> Self {
        Self::new(FakeTtsClientConfig {
            fail_on_call: Some(call),
            ..Default::default()
        })
    }

    /// 已发起的调用次数（包括失败的调用）
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 成功处理的请求文本，按调用顺序
    pub fn texts(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.iter().map(|r| r.text.clone()).collect())
            .unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::debug!(
            call = call,
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: returning synthetic audio"
        );

        if self.config.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;
        }

        if self.config.fail_on_call == Some(call) {
            return Err(TtsError::ServiceError(format!(
                "HTTP 500 Internal Server Error: fake failure on call {}",
                call
            )));
        }

        let mut audio_data = self.config.header.clone();
        audio_data.extend_from_slice(request.text.as_bytes());
        let format = request.format;

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        Ok(SpeechResponse { audio_data, format })
    }
}
