//! Converter Adapter - 文档转纯文本实现

mod pandoc_converter;

pub use pandoc_converter::PandocConverter;
