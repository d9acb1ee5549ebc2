//! 应用层错误定义
//!
//! 统一的命令错误类型，所有错误对本次运行都是终止性的

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::{ConcatError, SegmentStorageError, TtsError};
use crate::domain::speech::CatalogError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入校验错误（文件不存在、格式/音色/模型无效）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部工具或凭据缺失
    #[error("Missing dependency: {0}")]
    DependencyMissing(String),

    /// 凭据被远程服务拒绝
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// 远程合成调用失败
    #[error("Synthesis request failed: {0}")]
    TransportError(String),

    /// 拼接失败，片段保留在 `segments_dir`
    #[error("Assembly failed: {message} (segments kept in {})", segments_dir.display())]
    AssemblyError {
        message: String,
        segments_dir: PathBuf,
    },

    /// 本地文件读写错误
    #[error("IO error: {0}")]
    IoError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建依赖缺失错误
    pub fn dependency_missing(message: impl Into<String>) -> Self {
        Self::DependencyMissing(message.into())
    }

    /// 取值不在允许列表中，附带可选值
    pub fn invalid_choice(err: CatalogError, available: &str) -> Self {
        Self::ValidationError(format!("{}. Available: {}", err, available))
    }

    pub fn assembly(message: impl Into<String>, segments_dir: impl Into<PathBuf>) -> Self {
        Self::AssemblyError {
            message: message.into(),
            segments_dir: segments_dir.into(),
        }
    }

    /// 进程退出码（所有错误均为 1）
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        match err {
            TtsError::Unauthorized(message) => Self::AuthError(message),
            other => Self::TransportError(other.to_string()),
        }
    }
}

impl From<SegmentStorageError> for ApplicationError {
    fn from(err: SegmentStorageError) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<ConcatError> for ApplicationError {
    fn from(err: ConcatError) -> Self {
        match err {
            ConcatError::Unavailable(message) => Self::DependencyMissing(message),
            other => Self::IoError(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_auth_error() {
        let err: ApplicationError = TtsError::Unauthorized("HTTP 401".into()).into();
        assert!(matches!(err, ApplicationError::AuthError(_)));

        let err: ApplicationError = TtsError::Timeout.into();
        assert!(matches!(err, ApplicationError::TransportError(_)));
    }

    #[test]
    fn test_catalog_error_is_validation() {
        let err: ApplicationError = CatalogError::UnknownFormat("mp4".into()).into();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
        assert_eq!(err.to_string(), "Validation error: Invalid format 'mp4'");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_choice_lists_options() {
        let err = ApplicationError::invalid_choice(
            CatalogError::UnknownVoice("robot".into()),
            "shimmer, alloy",
        );
        assert_eq!(
            err.to_string(),
            "Validation error: Unknown voice 'robot'. Available: shimmer, alloy"
        );
    }

    #[test]
    fn test_assembly_error_mentions_segments_dir() {
        let err = ApplicationError::assembly("ffmpeg exited with 1", "/tmp/md2audio-x");
        assert!(err.to_string().contains("/tmp/md2audio-x"));
    }
}
