//! md2audio - markdown 文档转语音
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 音色、模型、格式、费用估算
//! - 文本分块器
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, TextConverter, MediaConcatenator, SegmentStorage）
//! - Services: 文本提取、音频组装
//! - Commands: 转换与预览命令处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: OpenAI TTS Client, pandoc, ffmpeg, 片段存储

pub mod app;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use app::{build_app, build_app_with_engine, App, RunOutcome};
pub use cli::{Cli, CliCommand};
pub use config::{load_config, AppConfig};
