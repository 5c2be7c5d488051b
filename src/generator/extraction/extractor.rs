use anyhow::Result;
use std::sync::Arc;

use super::merge::merge_brief;
use super::prompt::{EXTRACTION_SYSTEM_PROMPT, build_extraction_prompt};
use crate::generator::error::AiBriefError;
use crate::generator::observer::{PipelineEvent, PipelineObserver};
use crate::llm::capability::StructuredGenerator;
use crate::types::brief::Brief;
use crate::types::input::BriefParseInput;
use crate::types::research::ResearchResult;
use crate::types::result::{BriefParseResult, BriefSource};

/// 简报抽取器
pub struct BriefExtractor<G> {
    generator: Arc<G>,
    observer: Arc<dyn PipelineObserver>,
}

impl<G: StructuredGenerator> BriefExtractor<G> {
    pub fn new(generator: Arc<G>, observer: Arc<dyn PipelineObserver>) -> Self {
        Self {
            generator,
            observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 把调研结果抽取为结构化简报并合并调用方的覆盖项
    ///
    /// 模型没有给出有效对象时返回 `BRIEF_EXTRACTION_FAILED`，不做重试。
    pub async fn extract_brief(
        &self,
        input: &BriefParseInput,
        research: ResearchResult,
    ) -> Result<BriefParseResult> {
        self.observer.on_event(&PipelineEvent::ExtractionStarted);

        let user_prompt = build_extraction_prompt(input, &research);
        let extracted = self
            .generator
            .generate_object::<Brief>(EXTRACTION_SYSTEM_PROMPT, &user_prompt)
            .await?;

        let Some(extracted) = extracted else {
            self.observer.on_event(&PipelineEvent::ExtractionFailed);
            return Err(AiBriefError::extraction_failed().into());
        };

        self.observer.on_event(&PipelineEvent::ExtractionCompleted);

        Ok(BriefParseResult {
            brief: merge_brief(input, extracted),
            warnings: research.warnings,
            source: BriefSource::Ai,
            sources: research.sources,
            research_summary: research.summary,
            step_count: research.step_count,
        })
    }
}
