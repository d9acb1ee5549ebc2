//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod media_concatenator;
mod segment_storage;
mod text_converter;
mod tts_engine;

pub use media_concatenator::{ConcatError, MediaConcatenatorPort};
pub use segment_storage::{SegmentStorageError, SegmentStoragePort};
pub use text_converter::{ConvertError, TextConverterPort};
pub use tts_engine::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};
