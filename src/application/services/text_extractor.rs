//! Text Extractor - markdown 转纯文本
//!
//! 优先使用外部转换器，失败时退化为直接读取原文（保留 markdown 语法）

use std::path::Path;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ConvertError, TextConverterPort};

/// 文本提取服务
pub struct TextExtractor {
    converter: Arc<dyn TextConverterPort>,
}

impl TextExtractor {
    pub fn new(converter: Arc<dyn TextConverterPort>) -> Self {
        Self { converter }
    }

    /// 提取文档纯文本，并去除空行
    ///
    /// 转换器会启动子进程，放到阻塞线程池执行
    pub async fn extract(&self, document: &Path) -> Result<String, ApplicationError> {
        let converter = self.converter.clone();
        let path = document.to_path_buf();
        let converted = tokio::task::spawn_blocking(move || converter.to_plain_text(&path))
            .await
            .unwrap_or_else(|e| Err(ConvertError::Failed(e.to_string())));

        let raw = match converted {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    path = %document.display(),
                    error = %e,
                    "Converter failed, reading raw document instead"
                );
                let bytes = tokio::fs::read(document).await.map_err(|e| {
                    ApplicationError::IoError(format!(
                        "Failed to read {}: {}",
                        document.display(),
                        e
                    ))
                })?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
        };

        Ok(drop_blank_lines(&raw))
    }
}

/// 删除空白行，其余行按原顺序以单个换行连接
pub fn drop_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread::ThreadId;
    use tempfile::tempdir;

    struct StaticConverter(Result<String, ()>);

    impl TextConverterPort for StaticConverter {
        fn to_plain_text(&self, _document: &Path) -> Result<String, ConvertError> {
            self.0
                .clone()
                .map_err(|_| ConvertError::Unavailable("pandoc: not found".to_string()))
        }
    }

    /// 记录执行转换的线程
    #[derive(Default)]
    struct ThreadRecordingConverter(Mutex<Option<ThreadId>>);

    impl TextConverterPort for ThreadRecordingConverter {
        fn to_plain_text(&self, _document: &Path) -> Result<String, ConvertError> {
            *self.0.lock().unwrap() = Some(std::thread::current().id());
            Ok("converted".to_string())
        }
    }

    #[test]
    fn test_drop_blank_lines() {
        let text = "Title\n\n\n   \nFirst line\r\n\t\nSecond line\n";
        assert_eq!(drop_blank_lines(text), "Title\nFirst line\nSecond line");
        assert_eq!(drop_blank_lines("\n \n"), "");
    }

    #[tokio::test]
    async fn test_uses_converter_output() {
        let temp_dir = tempdir().unwrap();
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "# Heading\n\nBody").unwrap();

        let extractor = TextExtractor::new(Arc::new(StaticConverter(Ok(
            "Heading\n\n\nBody\n".to_string(),
        ))));
        let text = extractor.extract(&doc).await.unwrap();
        assert_eq!(text, "Heading\nBody");
    }

    #[tokio::test]
    async fn test_falls_back_to_raw_read() {
        let temp_dir = tempdir().unwrap();
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "# Heading\n\n* item **bold**\n\n").unwrap();

        let extractor = TextExtractor::new(Arc::new(StaticConverter(Err(()))));
        let text = extractor.extract(&doc).await.unwrap();
        // 退化路径保留 markdown 语法
        assert_eq!(text, "# Heading\n* item **bold**");
    }

    #[tokio::test]
    async fn test_fallback_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let doc = temp_dir.path().join("missing.md");

        let extractor = TextExtractor::new(Arc::new(StaticConverter(Err(()))));
        let result = extractor.extract(&doc).await;
        assert!(matches!(result, Err(ApplicationError::IoError(_))));
    }

    #[tokio::test]
    async fn test_converter_runs_off_runtime_thread() {
        let temp_dir = tempdir().unwrap();
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "# Heading").unwrap();

        let converter = Arc::new(ThreadRecordingConverter::default());
        let extractor = TextExtractor::new(converter.clone());
        let text = extractor.extract(&doc).await.unwrap();

        assert_eq!(text, "converted");
        let used = converter.0.lock().unwrap().expect("converter not called");
        assert_ne!(used, std::thread::current().id());
    }
}
