//! Concatenator Adapter - 音频片段拼接实现

mod ffmpeg_concatenator;

pub use ffmpeg_concatenator::{concat_list, FfmpegConcatenator};
