//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、TextConverter、MediaConcatenator、SegmentStorage）
//! - services: 文本提取与音频组装
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use commands::{
    handlers::{
        ConvertDocumentHandler, ConvertDocumentResponse, ConvertSettings, PreviewVoicesHandler,
        PreviewVoicesResponse,
    },
    ConvertDocument, PreviewVoices,
};

pub use error::ApplicationError;

pub use ports::{
    ConcatError, ConvertError, MediaConcatenatorPort, SegmentStorageError, SegmentStoragePort,
    SpeechRequest, SpeechResponse, TextConverterPort, TtsEnginePort, TtsError,
};

pub use services::{Assembler, TextExtractor};
