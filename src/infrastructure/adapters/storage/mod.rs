//! Storage Adapter - 片段临时存储实现

mod segment_storage;

pub use segment_storage::FileSegmentStorage;
