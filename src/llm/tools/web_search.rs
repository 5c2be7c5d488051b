//! 联网搜索工具配置
//!
//! 搜索由模型服务端执行（Gemini Search Grounding），客户端只负责声明工具及其动态检索策略。

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// 动态检索的默认阈值，偏向于调用搜索
pub const DEFAULT_DYNAMIC_THRESHOLD: f64 = 0.3;

/// 检索模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RetrievalMode {
    /// 由模型根据置信度在每一步自行决定是否搜索
    #[serde(rename = "MODE_DYNAMIC")]
    #[default]
    Dynamic,
}

/// 联网搜索工具
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSearchTool {
    pub mode: RetrievalMode,
    pub dynamic_threshold: f64,
}

impl Default for WebSearchTool {
    fn default() -> Self {
        Self::dynamic(DEFAULT_DYNAMIC_THRESHOLD)
    }
}

impl WebSearchTool {
    pub const NAME: &'static str = "google_search";

    /// 创建动态检索工具，`threshold` 会被限制在 [0, 1] 区间
    pub fn dynamic(threshold: f64) -> Self {
        Self {
            mode: RetrievalMode::Dynamic,
            dynamic_threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// 生成Gemini generateContent请求中的工具声明
    ///
    /// gemini-1.5系列使用 `googleSearchRetrieval` 并携带动态检索配置；
    /// 更新的模型只接受 `googleSearch`，由服务端自行决定检索时机。
    pub fn to_gemini_tool(&self, model: &str) -> Value {
        if !model.starts_with("gemini-1.5") {
            return json!({ "googleSearch": {} });
        }

        json!({
            "googleSearchRetrieval": {
                "dynamicRetrievalConfig": {
                    "mode": self.mode,
                    "dynamicThreshold": self.dynamic_threshold,
                }
            }
        })
    }
}
