//! Pandoc Converter - 调用 pandoc 将 markdown 转为纯文本
//!
//! 实现 TextConverterPort trait

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::application::ports::{ConvertError, TextConverterPort};

/// Pandoc 转换器
pub struct PandocConverter {
    /// pandoc 可执行文件
    program: String,
}

impl PandocConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        Self::new("pandoc")
    }
}

impl TextConverterPort for PandocConverter {
    fn to_plain_text(&self, document: &Path) -> Result<String, ConvertError> {
        let output = Command::new(&self.program)
            .arg(document)
            .args(["-t", "plain"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ConvertError::Unavailable(format!("'{}' not found on PATH", self.program))
                }
                _ => ConvertError::Unavailable(format!("Cannot run '{}': {}", self.program, e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
