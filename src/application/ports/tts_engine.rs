//! TTS Engine Port - 语音合成引擎抽象
//!
//! 定义远程 TTS 调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{AudioFormat, TtsModel, Voice};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    /// 凭据缺失或被服务拒绝（401/403）
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成请求（一个文本块）
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的文本内容
    pub text: String,
    pub voice: Voice,
    pub model: TtsModel,
    pub format: AudioFormat,
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// 编码后的音频数据（格式与请求一致）
    pub audio_data: Vec<u8>,
    pub format: AudioFormat,
}

/// TTS Engine Port
///
/// 外部 TTS 服务的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 合成一个文本块，返回一段音频
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError>;
}
