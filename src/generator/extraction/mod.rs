// 抽取阶段：不带工具的Schema约束生成，把调研总结转换为结构化简报，再合并调用方的覆盖项

pub mod extractor;
pub mod merge;
pub mod prompt;

pub use extractor::BriefExtractor;
pub use merge::merge_brief;
