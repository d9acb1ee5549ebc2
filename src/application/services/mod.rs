//! Application Services - 流水线中的组合步骤

mod assembler;
mod text_extractor;

pub use assembler::Assembler;
pub use text_extractor::{drop_blank_lines, TextExtractor};
