//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment};
use std::collections::HashMap;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 环境变量前缀
const ENV_PREFIX: &str = "MD2AUDIO";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `MD2AUDIO_`，层级分隔符 `__`）
/// 2. 默认值
///
/// # 环境变量示例
/// - `MD2AUDIO_TTS__BASE_URL=http://localhost:9000/v1`
/// - `MD2AUDIO_SYNTHESIS__MAX_CHUNK_CHARS=2000`
/// - `MD2AUDIO_TOOLS__FFMPEG=/opt/ffmpeg/bin/ffmpeg`
/// - `MD2AUDIO_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_env(None)
}

/// 从给定的环境变量集合加载配置
///
/// # 参数
/// - `vars` - 为 None 时读取进程环境变量
pub fn load_config_from_env(
    vars: Option<HashMap<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("tts.base_url", "https://api.openai.com/v1")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("tts.api_key_env", "OPENAI_API_KEY")?
        .set_default("synthesis.max_chunk_chars", 4000)?
        .set_default("synthesis.max_concurrent", 1)?
        .set_default("tools.pandoc", "pandoc")?
        .set_default("tools.ffmpeg", "ffmpeg")?
        .set_default("preview.output_dir", ".")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 环境变量（最高优先级）
    // 例如: MD2AUDIO_TTS__BASE_URL -> tts.base_url
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.tts.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.api_key_env.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "API key variable name cannot be empty".to_string(),
        ));
    }

    if config.synthesis.max_chunk_chars == 0 {
        return Err(ConfigError::ValidationError(
            "max_chunk_chars must be greater than 0".to_string(),
        ));
    }

    if config.synthesis.max_concurrent == 0 {
        return Err(ConfigError::ValidationError(
            "max_concurrent must be at least 1".to_string(),
        ));
    }

    if config.tools.pandoc.trim().is_empty() || config.tools.ffmpeg.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Tool names cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（debug 级别）
pub fn print_config(config: &AppConfig) {
    tracing::debug!(
        base_url = %config.tts.base_url,
        timeout_secs = config.tts.timeout_secs,
        api_key_env = %config.tts.api_key_env,
        max_chunk_chars = config.synthesis.max_chunk_chars,
        max_concurrent = config.synthesis.max_concurrent,
        pandoc = %config.tools.pandoc,
        ffmpeg = %config.tools.ffmpeg,
        temp_dir = %config.storage.effective_temp_dir().display(),
        preview_dir = %config.preview.output_dir.display(),
        log_level = %config.log.level,
        "Effective configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_load_defaults() {
        let config = load_config_from_env(vars(&[])).unwrap();
        assert_eq!(config.tts.base_url, "https://api.openai.com/v1");
        assert_eq!(config.tts.timeout_secs, 120);
        assert_eq!(config.synthesis.max_chunk_chars, 4000);
        assert_eq!(config.synthesis.max_concurrent, 1);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
        assert!(config.storage.temp_dir.is_none());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = load_config_from_env(vars(&[
            ("MD2AUDIO_TTS__BASE_URL", "http://localhost:9000/v1"),
            ("MD2AUDIO_SYNTHESIS__MAX_CHUNK_CHARS", "2000"),
            ("MD2AUDIO_TOOLS__FFMPEG", "/opt/ffmpeg"),
            ("MD2AUDIO_LOG__JSON", "true"),
            ("UNRELATED_VAR", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.tts.base_url, "http://localhost:9000/v1");
        assert_eq!(config.synthesis.max_chunk_chars, 2000);
        assert_eq!(config.tools.ffmpeg, "/opt/ffmpeg");
        assert!(config.log.json);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_chunk_size() {
        let mut config = AppConfig::default();
        config.synthesis.max_chunk_chars = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_concurrency() {
        let result = load_config_from_env(vars(&[("MD2AUDIO_SYNTHESIS__MAX_CONCURRENT", "0")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.tts.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tool() {
        let mut config = AppConfig::default();
        config.tools.pandoc = " ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
