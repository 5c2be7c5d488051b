use crate::config::Config;
use crate::generator::extraction::BriefExtractor;
use crate::generator::observer::{PipelineObserver, TracingObserver};
use crate::generator::research::{ResearchOrchestrator, ResearchSettings};
use crate::llm::capability::{SearchGenerator, StructuredGenerator};
use crate::llm::client::LLMClient;
use crate::llm::grounding::{CitationExtractor, GeminiGroundingExtractor};
use crate::types::input::BriefParseInput;
use crate::types::result::BriefParseResult;

use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// 简报生成流水线：调研 -> 抽取 -> 合并
///
/// 不持有任何跨调用的可变状态，多个调用可以安全并发。
pub struct BriefPipeline<S, G> {
    research: ResearchOrchestrator<S>,
    extractor: BriefExtractor<G>,
}

impl<S, G> BriefPipeline<S, G>
where
    S: SearchGenerator,
    G: StructuredGenerator,
{
    /// 创建流水线，默认把阶段事件写入tracing
    pub fn new(
        search: Arc<S>,
        structured: Arc<G>,
        citations: Arc<dyn CitationExtractor>,
        settings: ResearchSettings,
    ) -> Self {
        let observer: Arc<dyn PipelineObserver> = Arc::new(TracingObserver);
        Self {
            research: ResearchOrchestrator::new(search, citations, settings, observer.clone()),
            extractor: BriefExtractor::new(structured, observer),
        }
    }

    /// 替换观测者
    pub fn with_observer(self, observer: Arc<dyn PipelineObserver>) -> Self {
        Self {
            research: self.research.with_observer(observer.clone()),
            extractor: self.extractor.with_observer(observer),
        }
    }

    /// 执行完整流水线
    ///
    /// 两个阶段严格串行，任一阶段的错误直接向上传播，不返回部分结果。
    pub async fn parse_brief_with_ai(&self, input: &BriefParseInput) -> Result<BriefParseResult> {
        let run_id = Uuid::new_v4();
        async {
            let research = self.research.conduct_research(input).await?;
            self.extractor.extract_brief(input, research).await
        }
        .instrument(info_span!("brief_pipeline", %run_id))
        .await
    }
}

/// 根据配置组装生产环境的流水线并执行
pub async fn launch(config: &Config, input: BriefParseInput) -> Result<BriefParseResult> {
    config.validate()?;
    input.validate()?;

    let client = Arc::new(LLMClient::new(config.clone())?);
    let pipeline = BriefPipeline::new(
        client.clone(),
        client,
        Arc::new(GeminiGroundingExtractor),
        ResearchSettings::from(&config.research),
    );

    let started = Instant::now();
    let result = pipeline.parse_brief_with_ai(&input).await?;
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        sources = result.sources.len(),
        warnings = result.warnings.len(),
        "brief generated"
    );

    Ok(result)
}
