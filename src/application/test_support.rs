//! 测试替身：不调用外部程序的转换器与拼接器

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{ConcatError, ConvertError, MediaConcatenatorPort, TextConverterPort};

/// 原样返回文件内容的转换器
pub struct PassthroughConverter;

impl TextConverterPort for PassthroughConverter {
    fn to_plain_text(&self, document: &Path) -> Result<String, ConvertError> {
        std::fs::read_to_string(document).map_err(|e| ConvertError::Failed(e.to_string()))
    }
}

/// 直接拼接字节的拼接器
#[derive(Default)]
pub struct ByteConcatenator {
    pub fail: bool,
    pub unavailable: bool,
    pub calls: AtomicUsize,
}

impl ByteConcatenator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MediaConcatenatorPort for ByteConcatenator {
    fn concat(
        &self,
        segments: &[PathBuf],
        output: &Path,
        _work_dir: &Path,
    ) -> Result<(), ConcatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ConcatError::Failed("exit status: 1".to_string()));
        }
        let mut data = Vec::new();
        for segment in segments {
            data.extend(std::fs::read(segment).map_err(|e| ConcatError::IoError(e.to_string()))?);
        }
        std::fs::write(output, data).map_err(|e| ConcatError::IoError(e.to_string()))
    }

    fn check_available(&self) -> Result<(), ConcatError> {
        if self.unavailable {
            return Err(ConcatError::Unavailable("ffmpeg not found".to_string()));
        }
        Ok(())
    }
}
