//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::DEFAULT_MAX_CHUNK_CHARS;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 远程 TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 分块与请求调度配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 外部工具配置
    #[serde(default)]
    pub tools: ToolsConfig,

    /// 临时片段存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 预览配置
    #[serde(default)]
    pub preview: PreviewConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// API 基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 存放 API Key 的环境变量名
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_tts_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            timeout_secs: default_tts_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

/// 合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 单块最大字符数
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// 同时进行的请求数，1 为顺序执行
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}

fn default_max_concurrent() -> usize {
    1
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// 外部工具配置
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// markdown 转换器
    #[serde(default = "default_pandoc")]
    pub pandoc: String,

    /// 音频拼接工具
    #[serde(default = "default_ffmpeg")]
    pub ffmpeg: String,
}

fn default_pandoc() -> String {
    "pandoc".to_string()
}

fn default_ffmpeg() -> String {
    "ffmpeg".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pandoc: default_pandoc(),
            ffmpeg: default_ffmpeg(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// 片段临时目录，未设置时使用系统临时目录
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn effective_temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// 预览配置
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    /// 样本输出目录
    #[serde(default = "default_preview_dir")]
    pub output_dir: PathBuf,
}

fn default_preview_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output_dir: default_preview_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tts.base_url, "https://api.openai.com/v1");
        assert_eq!(config.tts.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.synthesis.max_chunk_chars, 4000);
        assert_eq!(config.synthesis.max_concurrent, 1);
        assert_eq!(config.tools.ffmpeg, "ffmpeg");
        assert_eq!(config.preview.output_dir, PathBuf::from("."));
        assert!(config.storage.temp_dir.is_none());
    }

    #[test]
    fn test_effective_temp_dir() {
        let config = StorageConfig::default();
        assert_eq!(config.effective_temp_dir(), std::env::temp_dir());

        let config = StorageConfig {
            temp_dir: Some(PathBuf::from("/var/tmp/md2audio")),
        };
        assert_eq!(config.effective_temp_dir(), PathBuf::from("/var/tmp/md2audio"));
    }
}
