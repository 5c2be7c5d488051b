//! 单元测试用的模型桩与观测记录器

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Mutex;

use crate::generator::observer::{PipelineEvent, PipelineObserver};
use crate::llm::capability::{
    GenerationStep, SearchGeneration, SearchGenerationRequest, SearchGenerator, StructuredGenerator,
};

/// 生成一个带Gemini溯源元数据的步骤
pub fn grounded_step(chunks: &[(&str, &str)]) -> GenerationStep {
    let chunks: Vec<Value> = chunks
        .iter()
        .map(|(uri, title)| json!({ "web": { "uri": uri, "title": title } }))
        .collect();
    GenerationStep::with_metadata(json!({ "groundingMetadata": { "groundingChunks": chunks } }))
}

pub struct StubSearchGenerator {
    response: Result<SearchGeneration, String>,
    last_request: Mutex<Option<SearchGenerationRequest>>,
}

impl StubSearchGenerator {
    /// 单步、无引用
    pub fn text(text: &str) -> Self {
        Self::with_steps(text, vec![GenerationStep::default()])
    }

    pub fn with_steps(text: &str, steps: Vec<GenerationStep>) -> Self {
        Self {
            response: Ok(SearchGeneration {
                text: text.to_string(),
                steps,
            }),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<SearchGenerationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchGenerator for StubSearchGenerator {
    async fn generate_with_search(
        &self,
        request: SearchGenerationRequest,
    ) -> Result<SearchGeneration> {
        *self.last_request.lock().unwrap() = Some(request);
        self.response.clone().map_err(|e| anyhow!(e))
    }
}

/// 返回预置JSON的结构化生成桩；JSON不符合目标类型时视为无有效输出
pub struct StubStructuredGenerator {
    response: Result<Option<Value>, String>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubStructuredGenerator {
    pub fn returning(value: Value) -> Self {
        Self {
            response: Ok(Some(value)),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn empty() -> Self {
        Self {
            response: Ok(None),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            prompts: Mutex::new(vec![]),
        }
    }

    /// (system_prompt, user_prompt) 调用记录
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl StructuredGenerator for StubStructuredGenerator {
    async fn generate_object<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<Option<T>>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        self.prompts
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match &self.response {
            Ok(value) => Ok(value
                .clone()
                .and_then(|v| serde_json::from_value::<T>(v).ok())),
            Err(message) => Err(anyhow!(message.clone())),
        }
    }
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_event(&self, event: &PipelineEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
