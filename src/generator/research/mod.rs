// 调研阶段：带联网搜索的Agent循环
// 输入 = 投放意图 + 已知上下文（行业、版位、敏感词）
// 输出 = 自由文本总结 + 去重后的引用来源 + 提示信息

use crate::config::ResearchConfig;
use crate::llm::tools::web_search::DEFAULT_DYNAMIC_THRESHOLD;

pub mod orchestrator;
pub mod prompt;
pub mod sources;

pub use orchestrator::ResearchOrchestrator;

/// 调研阶段的默认最大步数
pub const DEFAULT_MAX_STEPS: usize = 8;

pub const WARNING_NO_SOURCES: &str =
    "No sources were found during research; the brief relies on the model's own knowledge.";

/// 达到步数上限时的提示
pub fn incomplete_research_warning(max_steps: usize) -> String {
    format!(
        "Research reached the maximum of {} steps and may be incomplete.",
        max_steps
    )
}

/// 调研阶段运行参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResearchSettings {
    pub max_steps: usize,
    pub dynamic_threshold: f64,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            dynamic_threshold: DEFAULT_DYNAMIC_THRESHOLD,
        }
    }
}

impl From<&ResearchConfig> for ResearchSettings {
    fn from(config: &ResearchConfig) -> Self {
        Self {
            max_steps: config.max_steps,
            dynamic_threshold: config.dynamic_threshold,
        }
    }
}
