use serde::{Deserialize, Serialize};

/// 引用来源摘要的最大字符数
pub const SNIPPET_MAX_CHARS: usize = 200;

/// 调研阶段得到的一条引用来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 检索上下文片段，已截断至200字符
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl ResearchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            snippet: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// 设置摘要，超出长度的部分会被截断
    pub fn with_snippet(mut self, snippet: &str) -> Self {
        self.snippet = Some(truncate_snippet(snippet));
        self
    }
}

/// 按字符（而非字节）截断摘要
pub fn truncate_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_MAX_CHARS).collect()
}

/// 调研阶段的输出
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    /// 模型给出的自由文本调研总结，原样保留
    pub summary: String,
    /// 按URL去重后的引用来源
    pub sources: Vec<ResearchSource>,
    /// 实际执行的Agent步数
    pub step_count: usize,
    /// 非致命的提示信息
    pub warnings: Vec<String>,
}
