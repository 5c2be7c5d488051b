use serde::{Deserialize, Serialize};

use crate::types::brief::Brief;
use crate::types::research::ResearchSource;

/// 简报的生成来源标记，当前流水线固定为 "ai"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BriefSource {
    #[serde(rename = "ai")]
    #[default]
    Ai,
}

/// 流水线最终输出，返回后归调用方所有
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefParseResult {
    pub brief: Brief,
    pub warnings: Vec<String>,
    pub source: BriefSource,
    pub sources: Vec<ResearchSource>,
    /// 调研阶段的原始总结文本
    pub research_summary: String,
    pub step_count: usize,
}
