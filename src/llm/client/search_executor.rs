//! 联网调研执行器 - 负责执行带搜索溯源的多步生成循环

use anyhow::{Context, Result, anyhow, bail};
use std::time::Duration;
use tracing::debug;

use super::types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::ResearchConfig;
use crate::llm::capability::{GenerationStep, SearchGeneration, SearchGenerationRequest};
use crate::llm::tools::web_search::WebSearchTool;

/// 输出被截断后要求模型接着写的指令
const CONTINUE_PROMPT: &str = "Continue your research synthesis exactly where you stopped.";

/// 基于Gemini generateContent接口的调研执行器
#[derive(Clone)]
pub struct GeminiSearchExecutor {
    http: reqwest::Client,
    config: ResearchConfig,
}

impl GeminiSearchExecutor {
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client for research")?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// 执行调研循环
    ///
    /// 每次generateContent调用记为一步；只有在输出因token上限被截断时才进入下一步，步数不超过 `max_steps`。
    pub async fn execute(&self, request: &SearchGenerationRequest) -> Result<SearchGeneration> {
        let max_steps = request.max_steps;
        let mut contents = vec![Content::user(request.user_prompt.clone())];
        let mut generation = SearchGeneration::default();

        debug!(
            model = %self.config.model,
            tool = WebSearchTool::NAME,
            max_steps,
            "starting search-grounded generation"
        );

        while generation.steps.len() < max_steps {
            let body = self.build_request(request, &contents);
            let candidate = self.send(&body).await?;

            let step_text = candidate.text();
            generation.text.push_str(&step_text);
            generation.steps.push(GenerationStep {
                provider_metadata: candidate
                    .grounding_metadata
                    .clone()
                    .map(|gm| serde_json::json!({ "groundingMetadata": gm })),
            });

            debug!(
                step = generation.steps.len(),
                finish_reason = ?candidate.finish_reason,
                grounded = candidate.grounding_metadata.is_some(),
                "research step finished"
            );

            if !candidate.is_truncated() {
                break;
            }

            contents.push(Content::model(step_text));
            contents.push(Content::user(CONTINUE_PROMPT));
        }

        Ok(generation)
    }

    fn build_request(
        &self,
        request: &SearchGenerationRequest,
        contents: &[Content],
    ) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: contents.to_vec(),
            system_instruction: (!request.system_prompt.is_empty())
                .then(|| Content::system(request.system_prompt.clone())),
            tools: vec![request.web_search.to_gemini_tool(&self.config.model)],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn send(&self, body: &GenerateContentRequest) -> Result<Candidate> {
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .context("Research request to Gemini failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            bail!("Gemini returned {}: {}", status, detail);
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to decode Gemini response")?;

        first_candidate(parsed)
    }
}

fn first_candidate(response: GenerateContentResponse) -> Result<Candidate> {
    let feedback = response.prompt_feedback;
    response.candidates.into_iter().next().ok_or_else(|| match feedback {
        Some(feedback) => anyhow!("Gemini returned no candidates: {}", feedback),
        None => anyhow!("Gemini returned no candidates"),
    })
}
