//! FFmpeg Concatenator - 基于 ffmpeg concat demuxer 的流级拼接
//!
//! 实现 MediaConcatenatorPort trait
//!
//! 调用方式：
//! `ffmpeg -f concat -safe 0 -i {work_dir}/concat.txt -c copy {output} -y`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::application::ports::{ConcatError, MediaConcatenatorPort};

/// 列表文件名
const LIST_FILE_NAME: &str = "concat.txt";

/// FFmpeg 拼接器
pub struct FfmpegConcatenator {
    /// ffmpeg 可执行文件
    program: String,
}

impl FfmpegConcatenator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> ConcatError {
        if e.kind() == ErrorKind::NotFound {
            ConcatError::Unavailable(format!("'{}' not found on PATH", self.program))
        } else {
            ConcatError::Unavailable(format!("Cannot run '{}': {}", self.program, e))
        }
    }
}

impl Default for FfmpegConcatenator {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

/// 生成 concat demuxer 列表内容，每行一个 `file '<path>'`
///
/// 路径中的单引号转义为 `'\''`
pub fn concat_list(segments: &[PathBuf]) -> String {
    segments
        .iter()
        .map(|path| {
            let escaped = path.to_string_lossy().replace('\'', r"'\''");
            format!("file '{}'\n", escaped)
        })
        .collect()
}

impl MediaConcatenatorPort for FfmpegConcatenator {
    fn concat(
        &self,
        segments: &[PathBuf],
        output: &Path,
        work_dir: &Path,
    ) -> Result<(), ConcatError> {
        // 列表中的相对路径会按列表文件所在目录解析
        let segments = segments
            .iter()
            .map(std::path::absolute)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConcatError::IoError(e.to_string()))?;

        let list_path = work_dir.join(LIST_FILE_NAME);
        std::fs::write(&list_path, concat_list(&segments))
            .map_err(|e| ConcatError::IoError(format!("{}: {}", list_path.display(), e)))?;

        tracing::debug!(
            list = %list_path.display(),
            output = %output.display(),
            segments = segments.len(),
            "Running ffmpeg concat"
        );

        let result = Command::new(&self.program)
            .args(["-f", "concat", "-safe", "0", "-i"])
            .arg(&list_path)
            .args(["-c", "copy"])
            .arg(output)
            .arg("-y")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ConcatError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    fn check_available(&self) -> Result<(), ConcatError> {
        let result = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if result.success() {
            Ok(())
        } else {
            Err(ConcatError::Unavailable(format!(
                "'{} -version' exited with {}",
                self.program, result
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_concat_list_format() {
        let segments = vec![
            PathBuf::from("/tmp/md2audio-1/segment_0.mp3"),
            PathBuf::from("/tmp/md2audio-1/segment_1.mp3"),
        ];
        assert_eq!(
            concat_list(&segments),
            "file '/tmp/md2audio-1/segment_0.mp3'\nfile '/tmp/md2audio-1/segment_1.mp3'\n"
        );
    }

    #[test]
    fn test_concat_list_escapes_quotes() {
        let segments = vec![PathBuf::from("/tmp/it's here/segment_0.mp3")];
        assert_eq!(
            concat_list(&segments),
            "file '/tmp/it'\\''s here/segment_0.mp3'\n"
        );
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let concatenator = FfmpegConcatenator::new("md2audio-no-such-ffmpeg");
        assert!(matches!(
            concatenator.check_available(),
            Err(ConcatError::Unavailable(_))
        ));
    }

    #[test]
    fn test_concat_with_missing_program_writes_list() {
        let temp_dir = tempdir().unwrap();
        let segments = vec![temp_dir.path().join("segment_0.mp3")];
        let output = temp_dir.path().join("out.mp3");

        let concatenator = FfmpegConcatenator::new("md2audio-no-such-ffmpeg");
        let result = concatenator.concat(&segments, &output, temp_dir.path());

        assert!(matches!(result, Err(ConcatError::Unavailable(_))));
        let list = std::fs::read_to_string(temp_dir.path().join(LIST_FILE_NAME)).unwrap();
        assert!(list.starts_with("file '"));
        assert!(!output.exists());
    }

    #[test]
    fn test_relative_segments_listed_as_absolute() {
        let temp_dir = tempdir().unwrap();
        let segments = vec![PathBuf::from("tmp/md2audio-1/segment_0.mp3")];
        let output = temp_dir.path().join("out.mp3");

        let concatenator = FfmpegConcatenator::new("md2audio-no-such-ffmpeg");
        let _ = concatenator.concat(&segments, &output, temp_dir.path());

        let list = std::fs::read_to_string(temp_dir.path().join(LIST_FILE_NAME)).unwrap();
        let expected = std::env::current_dir()
            .unwrap()
            .join("tmp/md2audio-1/segment_0.mp3");
        assert_eq!(list, format!("file '{}'\n", expected.display()));
    }
}
