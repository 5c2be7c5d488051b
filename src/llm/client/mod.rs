//! LLM客户端 - 提供流水线所需的两种模型能力

use anyhow::Result;
use async_trait::async_trait;
use rig::extractor::ExtractionError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::llm::capability::{
    SearchGeneration, SearchGenerationRequest, SearchGenerator, StructuredGenerator,
};

mod providers;
mod search_executor;
pub mod types;

use providers::ProviderClient;
use search_executor::GeminiSearchExecutor;

/// LLM客户端
///
/// 调研走Gemini搜索溯源接口，结构化抽取走rig的Extractor，Provider由配置决定。
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
    search_executor: GeminiSearchExecutor,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        let search_executor = GeminiSearchExecutor::new(&config.research)?;
        Ok(Self {
            config,
            client,
            search_executor,
        })
    }
}

#[async_trait]
impl SearchGenerator for LLMClient {
    async fn generate_with_search(
        &self,
        request: SearchGenerationRequest,
    ) -> Result<SearchGeneration> {
        self.search_executor.execute(&request).await
    }
}

impl StructuredGenerator for LLMClient {
    async fn generate_object<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<Option<T>>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        let llm_config = &self.config.llm;
        let extractor =
            self.client
                .create_extractor::<T>(&llm_config.model, system_prompt, llm_config)?;

        match extractor.extract(user_prompt).await {
            Ok(value) => Ok(Some(value)),
            Err(ExtractionError::NoData) => {
                debug!(model = %llm_config.model, "extractor returned no data");
                Ok(None)
            }
            Err(ExtractionError::DeserializationError(e)) => {
                warn!(model = %llm_config.model, error = %e, "extracted data did not match schema");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
