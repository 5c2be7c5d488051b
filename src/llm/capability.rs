//! 流水线依赖的两种模型能力
//!
//! 联网调研使用自由文本生成（带工具、多步），抽取使用Schema约束生成，两者刻意拆分为独立接口。

use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm::tools::web_search::WebSearchTool;

/// 带联网搜索的生成请求
#[derive(Debug, Clone)]
pub struct SearchGenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub web_search: WebSearchTool,
    /// Agent循环的步数上限
    pub max_steps: usize,
}

/// Agent循环中单步的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationStep {
    /// Provider特有的元数据（例如Gemini的groundingMetadata），对流水线不透明
    pub provider_metadata: Option<Value>,
}

impl GenerationStep {
    pub fn with_metadata(metadata: Value) -> Self {
        Self {
            provider_metadata: Some(metadata),
        }
    }
}

/// 带联网搜索的生成结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchGeneration {
    pub text: String,
    /// 按执行顺序排列的步骤
    pub steps: Vec<GenerationStep>,
}

/// 工具增强的自由文本生成能力
#[async_trait]
pub trait SearchGenerator: Send + Sync {
    async fn generate_with_search(
        &self,
        request: SearchGenerationRequest,
    ) -> Result<SearchGeneration>;
}

/// Schema约束的结构化生成能力
///
/// 返回 `Ok(None)` 表示模型没有给出符合Schema的对象；网络等底层错误以 `Err` 原样抛出。
#[allow(async_fn_in_trait)]
pub trait StructuredGenerator: Send + Sync {
    async fn generate_object<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<Option<T>>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static;
}
