//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// 合成音色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Shimmer,
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
}

impl Voice {
    /// 全部音色（帮助文本和预览的顺序）
    pub const ALL: [Voice; 6] = [
        Voice::Shimmer,
        Voice::Alloy,
        Voice::Echo,
        Voice::Fable,
        Voice::Onyx,
        Voice::Nova,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shimmer => "shimmer",
            Self::Alloy => "alloy",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
        }
    }

    /// 音色描述
    pub fn description(&self) -> &'static str {
        match self {
            Self::Shimmer => "Female, soft and warm - gentle and calming",
            Self::Alloy => "Neutral, balanced - good for professional content",
            Self::Echo => "Male, clear and expressive - good for narration",
            Self::Fable => "British accent, warm - distinctive and engaging",
            Self::Onyx => "Deep male voice - authoritative tone",
            Self::Nova => "Female, energetic - upbeat and dynamic",
        }
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Voice {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|voice| voice.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownVoice(s.to_string()))
    }
}

/// TTS 模型
///
/// 费率以每 1000 字符美元计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TtsModel {
    /// 标准质量，生成更快，费用减半
    #[serde(rename = "tts-1")]
    Standard,
    /// 高清质量
    #[default]
    #[serde(rename = "tts-1-hd")]
    HighDefinition,
}

impl TtsModel {
    pub const ALL: [TtsModel; 2] = [TtsModel::Standard, TtsModel::HighDefinition];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "tts-1",
            Self::HighDefinition => "tts-1-hd",
        }
    }

    pub fn rate_per_1k_chars(&self) -> f64 {
        match self {
            Self::Standard => 0.015,
            Self::HighDefinition => 0.030,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Standard => "Standard quality - faster generation, half the cost",
            Self::HighDefinition => "High definition - best quality, recommended",
        }
    }

    /// 估算费用: (字符数 / 1000) * 费率
    pub fn estimate_cost(&self, char_count: usize) -> f64 {
        (char_count as f64 / 1000.0) * self.rate_per_1k_chars()
    }
}

impl std::fmt::Display for TtsModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TtsModel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownModel(s.to_string()))
    }
}

/// 音频输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// 通用兼容（默认）
    #[default]
    Mp3,
    /// 流媒体，低延迟
    Opus,
    /// 移动设备 / YouTube
    Aac,
    /// 无损压缩
    Flac,
    /// 无压缩
    Wav,
    /// 原始 PCM
    Pcm,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 6] = [
        AudioFormat::Mp3,
        AudioFormat::Opus,
        AudioFormat::Aac,
        AudioFormat::Flac,
        AudioFormat::Wav,
        AudioFormat::Pcm,
    ];

    /// 格式名，同时也是 API 的 response_format 取值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Pcm => "pcm",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// 无容器的原始采样（24kHz 16-bit 单声道），按字节顺序拼接即可
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Pcm)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Mp3 => "General use, widely compatible",
            Self::Opus => "Internet streaming, low latency, smaller files",
            Self::Aac => "Digital audio compression, preferred by YouTube/iOS/Android",
            Self::Flac => "Lossless compression, highest quality",
            Self::Wav => "Uncompressed, largest files",
            Self::Pcm => "Raw audio data",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AudioFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownFormat(s.to_string()))
    }
}
