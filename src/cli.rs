//! 命令行参数
//!
//! `md2audio <input.md> [output] [voice] [model] [format]`
//! `md2audio --preview [voice]`

use clap::Parser;
use std::path::PathBuf;

use crate::application::commands::ConvertDocument;
use crate::domain::speech::{AudioFormat, TtsModel, Voice};

#[derive(Parser, Debug)]
#[command(name = "md2audio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a markdown document into narrated audio")]
#[command(after_help = catalog_help())]
pub struct Cli {
    /// Markdown document to convert
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output audio file (defaults to the input path with the format's extension)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Voice identifier
    #[arg(value_name = "VOICE")]
    pub voice: Option<String>,

    /// Model identifier
    #[arg(value_name = "MODEL")]
    pub model: Option<String>,

    /// Audio format
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,

    /// Generate voice samples instead of converting (all voices unless one is given)
    #[arg(long, value_name = "VOICE", num_args = 0..=1, conflicts_with = "input")]
    pub preview: Option<Option<String>>,
}

/// 一次调用要执行的操作
#[derive(Debug, Clone)]
pub enum CliCommand {
    Convert(ConvertDocument),
    Preview { voice: Option<String> },
}

impl Cli {
    /// 无输入且非预览模式时返回 None（显示帮助）
    pub fn into_command(self) -> Option<CliCommand> {
        if let Some(voice) = self.preview {
            return Some(CliCommand::Preview { voice });
        }

        let input = self.input?;
        Some(CliCommand::Convert(ConvertDocument {
            input,
            output: self.output,
            voice: self.voice,
            model: self.model,
            format: self.format,
        }))
    }
}

/// 帮助信息尾部：可用的音色、模型与格式
fn catalog_help() -> String {
    let mut help = String::from("Voices:\n");
    for voice in Voice::ALL {
        help.push_str(&format!("  {:<8} {}\n", voice.as_str(), voice.description()));
    }
    help.push_str("\nModels:\n");
    for model in TtsModel::ALL {
        help.push_str(&format!("  {:<8} {}\n", model.as_str(), model.description()));
    }
    help.push_str("\nFormats:\n");
    for format in AudioFormat::ALL {
        help.push_str(&format!("  {:<8} {}\n", format.as_str(), format.description()));
    }
    help.push_str(
        "\nThe API key is read from OPENAI_API_KEY by default; \
         set MD2AUDIO_TTS__API_KEY_ENV to use another variable.\n",
    );
    help.push_str("Examples:\n");
    help.push_str("  md2audio notes.md\n");
    help.push_str("  md2audio notes.md notes.opus nova tts-1 opus\n");
    help.push_str("  md2audio --preview onyx\n");
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("md2audio").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let command = parse(&["doc.md", "out.wav", "nova", "tts-1", "wav"]).into_command();
        match command {
            Some(CliCommand::Convert(convert)) => {
                assert_eq!(convert.input, PathBuf::from("doc.md"));
                assert_eq!(convert.output, Some(PathBuf::from("out.wav")));
                assert_eq!(convert.voice.as_deref(), Some("nova"));
                assert_eq!(convert.model.as_deref(), Some("tts-1"));
                assert_eq!(convert.format.as_deref(), Some("wav"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_input_only() {
        match parse(&["doc.md"]).into_command() {
            Some(CliCommand::Convert(convert)) => {
                assert!(convert.output.is_none());
                assert!(convert.voice.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preview_with_and_without_voice() {
        assert!(matches!(
            parse(&["--preview"]).into_command(),
            Some(CliCommand::Preview { voice: None })
        ));
        match parse(&["--preview", "onyx"]).into_command() {
            Some(CliCommand::Preview { voice }) => assert_eq!(voice.as_deref(), Some("onyx")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert!(parse(&[]).into_command().is_none());
    }

    #[test]
    fn test_help_lists_catalog() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("shimmer"));
        assert!(help.contains("tts-1-hd"));
        assert!(help.contains("flac"));
        assert!(help.contains("OPENAI_API_KEY by default"));
        assert!(help.contains("MD2AUDIO_TTS__API_KEY_ENV"));
    }

    #[test]
    fn test_too_many_arguments_rejected() {
        let result = Cli::try_parse_from(["md2audio", "a", "b", "c", "d", "e", "f"]);
        assert!(result.is_err());
    }
}
