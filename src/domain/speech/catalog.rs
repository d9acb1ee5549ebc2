//! Catalog - 允许列表
//!
//! 启动时构建一次，以不可变值注入到各个 handler

use super::{AudioFormat, CatalogError, TtsModel, Voice};

/// 预览模式的固定示例文本
pub const PREVIEW_SAMPLE_TEXT: &str = "Hello! This is a sample of my voice. \
I'm demonstrating the text to speech capabilities of OpenAI's API. \
Each voice has its own unique character and tone.";

/// 可用音色/模型/格式及预览参数
#[derive(Debug, Clone)]
pub struct Catalog {
    pub voices: Vec<Voice>,
    pub models: Vec<TtsModel>,
    pub formats: Vec<AudioFormat>,
    pub default_voice: Voice,
    pub default_model: TtsModel,
    pub default_format: AudioFormat,
    /// 预览使用的模型（固定高清）
    pub preview_model: TtsModel,
    pub preview_format: AudioFormat,
    pub preview_text: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            voices: Voice::ALL.to_vec(),
            models: TtsModel::ALL.to_vec(),
            formats: AudioFormat::ALL.to_vec(),
            default_voice: Voice::Shimmer,
            default_model: TtsModel::HighDefinition,
            default_format: AudioFormat::Mp3,
            preview_model: TtsModel::HighDefinition,
            preview_format: AudioFormat::Mp3,
            preview_text: PREVIEW_SAMPLE_TEXT.to_string(),
        }
    }
}

impl Catalog {
    /// 解析音色，None 时返回默认值
    pub fn voice(&self, name: Option<&str>) -> Result<Voice, CatalogError> {
        let Some(name) = name else {
            return Ok(self.default_voice);
        };
        let voice: Voice = name.parse()?;
        if !self.voices.contains(&voice) {
            return Err(CatalogError::NotAllowed(format!("voice '{}'", name)));
        }
        Ok(voice)
    }

    pub fn model(&self, name: Option<&str>) -> Result<TtsModel, CatalogError> {
        let Some(name) = name else {
            return Ok(self.default_model);
        };
        let model: TtsModel = name.parse()?;
        if !self.models.contains(&model) {
            return Err(CatalogError::NotAllowed(format!("model '{}'", name)));
        }
        Ok(model)
    }

    pub fn format(&self, name: Option<&str>) -> Result<AudioFormat, CatalogError> {
        let Some(name) = name else {
            return Ok(self.default_format);
        };
        let format: AudioFormat = name.parse()?;
        if !self.formats.contains(&format) {
            return Err(CatalogError::NotAllowed(format!("format '{}'", name)));
        }
        Ok(format)
    }

    pub fn voice_names(&self) -> String {
        join_names(self.voices.iter().map(Voice::as_str))
    }

    pub fn model_names(&self) -> String {
        join_names(self.models.iter().map(TtsModel::as_str))
    }

    pub fn format_names(&self) -> String {
        join_names(self.formats.iter().map(AudioFormat::as_str))
    }

    /// 预览输出文件名，由音色确定
    pub fn preview_file_name(&self, voice: Voice) -> String {
        format!("voice-sample-{}.{}", voice, self.preview_format.extension())
    }

    /// 预览的总估算费用
    pub fn preview_cost(&self, voice_count: usize) -> f64 {
        let per_voice = self
            .preview_model
            .estimate_cost(self.preview_text.chars().count());
        per_voice * voice_count as f64
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
