//! 文本分块器
//!
//! 将纯文本切分为不超过最大字符数的有序块，每块对应一次 TTS 请求。
//! 优先在段落边界切分，段落过长时再按行和句子切分。

/// 默认单块最大字符数（API 单次请求上限 4096，留出余量）
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 4000;

/// 段落分隔符
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// 句子边界：句号后跟空格，句号保留在句子内
const SENTENCE_BOUNDARY: &str = ". ";

/// 分块配置
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// 单块最大字符数（按 Unicode 标量计）
    pub max_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// 累积缓冲区，放不下时把当前内容作为一个完整块输出
struct ChunkBuffer {
    max_chars: usize,
    current: String,
    current_len: usize,
    chunks: Vec<String>,
}

impl ChunkBuffer {
    fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            current: String::new(),
            current_len: 0,
            chunks: Vec::new(),
        }
    }

    /// 追加一个片段；`separator` 仅在缓冲区非空时插入
    fn push(&mut self, piece: &str, separator: &str) {
        let piece = piece.trim();
        if piece.is_empty() {
            return;
        }
        let piece_len = char_len(piece);

        if self.current_len == 0 {
            self.current.push_str(piece);
            self.current_len = piece_len;
            return;
        }

        let separator_len = char_len(separator);
        if self.current_len + separator_len + piece_len <= self.max_chars {
            self.current.push_str(separator);
            self.current.push_str(piece);
            self.current_len += separator_len + piece_len;
        } else {
            self.flush();
            self.current.push_str(piece);
            self.current_len = piece_len;
        }
    }

    fn flush(&mut self) {
        let trimmed = self.current.trim();
        if !trimmed.is_empty() {
            self.chunks.push(trimmed.to_string());
        }
        self.current.clear();
        self.current_len = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

/// 将超长段落拆成句子单元，并给出每个单元与前文之间的分隔符
///
/// 行首单元用换行连接，同一行内的句子用空格连接，段落首个单元用段落分隔符。
/// 单个句子即使超长也不再拆分。
fn sentence_units(paragraph: &str) -> Vec<(&str, &'static str)> {
    let mut units = Vec::new();
    let mut first_in_paragraph = true;

    for line in paragraph.lines() {
        let mut first_in_line = true;
        for sentence in line.split_inclusive(SENTENCE_BOUNDARY) {
            if sentence.trim().is_empty() {
                continue;
            }
            let separator = if first_in_paragraph {
                PARAGRAPH_SEPARATOR
            } else if first_in_line {
                "\n"
            } else {
                " "
            };
            units.push((sentence, separator));
            first_in_paragraph = false;
            first_in_line = false;
        }
    }

    units
}

/// 对文本进行分块
///
/// 分块策略：
/// 1. 总长度不超过上限时原样返回单块
/// 2. 按段落（`\n\n`）累积，放不下时输出当前块
/// 3. 单个段落超长时按行和句子（`". "`）累积
/// 4. 单个句子超长时整句作为一块输出（唯一允许超过上限的情况）
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<String> {
    let max_chars = config.max_chars.max(1);

    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut buffer = ChunkBuffer::new(max_chars);

    for paragraph in text.split(PARAGRAPH_SEPARATOR) {
        if char_len(paragraph) > max_chars {
            for (sentence, separator) in sentence_units(paragraph) {
                buffer.push(sentence, separator);
            }
        } else {
            buffer.push(paragraph, PARAGRAPH_SEPARATOR);
        }
    }

    buffer.finish()
}
