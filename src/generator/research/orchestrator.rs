use anyhow::Result;
use std::sync::Arc;

use super::prompt::{RESEARCH_SYSTEM_PROMPT, build_research_prompt};
use super::sources::collect_sources;
use super::{ResearchSettings, WARNING_NO_SOURCES, incomplete_research_warning};
use crate::generator::observer::{PipelineEvent, PipelineObserver};
use crate::llm::capability::{SearchGenerationRequest, SearchGenerator};
use crate::llm::grounding::CitationExtractor;
use crate::llm::tools::web_search::WebSearchTool;
use crate::types::input::BriefParseInput;
use crate::types::research::ResearchResult;

/// 调研编排器
pub struct ResearchOrchestrator<S> {
    search: Arc<S>,
    citations: Arc<dyn CitationExtractor>,
    settings: ResearchSettings,
    observer: Arc<dyn PipelineObserver>,
}

impl<S: SearchGenerator> ResearchOrchestrator<S> {
    pub fn new(
        search: Arc<S>,
        citations: Arc<dyn CitationExtractor>,
        settings: ResearchSettings,
        observer: Arc<dyn PipelineObserver>,
    ) -> Self {
        Self {
            search,
            citations,
            settings,
            observer,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// 执行调研：一次工具增强的生成调用，随后收集引用并生成提示信息
    pub async fn conduct_research(&self, input: &BriefParseInput) -> Result<ResearchResult> {
        let max_steps = self.settings.max_steps;
        self.observer
            .on_event(&PipelineEvent::ResearchStarted { max_steps });

        let request = SearchGenerationRequest {
            system_prompt: RESEARCH_SYSTEM_PROMPT.to_string(),
            user_prompt: build_research_prompt(input),
            web_search: WebSearchTool::dynamic(self.settings.dynamic_threshold),
            max_steps,
        };

        let generation = self.search.generate_with_search(request).await?;

        let step_count = generation.steps.len();
        let sources = collect_sources(&generation.steps, self.citations.as_ref());
        let warnings = research_warnings(sources.len(), step_count, max_steps);

        self.observer.on_event(&PipelineEvent::ResearchCompleted {
            step_count,
            source_count: sources.len(),
        });
        for warning in &warnings {
            self.observer
                .on_event(&PipelineEvent::Warning(warning.clone()));
        }

        Ok(ResearchResult {
            summary: generation.text,
            sources,
            step_count,
            warnings,
        })
    }
}

/// 根据调研结果生成非致命提示，两个条件可以同时成立
pub fn research_warnings(source_count: usize, step_count: usize, max_steps: usize) -> Vec<String> {
    let mut warnings = Vec::new();
    if source_count == 0 {
        warnings.push(WARNING_NO_SOURCES.to_string());
    }
    if step_count >= max_steps {
        warnings.push(incomplete_research_warning(max_steps));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::testing::{RecordingObserver, StubSearchGenerator, grounded_step};
    use crate::llm::capability::GenerationStep;
    use crate::llm::grounding::GeminiGroundingExtractor;
    use crate::types::input::Placement;

    fn orchestrator(
        search: StubSearchGenerator,
        observer: Arc<RecordingObserver>,
    ) -> (ResearchOrchestrator<StubSearchGenerator>, Arc<StubSearchGenerator>) {
        let search = Arc::new(search);
        let orchestrator = ResearchOrchestrator::new(
            search.clone(),
            Arc::new(GeminiGroundingExtractor),
            ResearchSettings::default(),
            observer,
        );
        (orchestrator, search)
    }

    fn input() -> BriefParseInput {
        BriefParseInput::new("Launch a sale for eco sneakers", vec![Placement::Square1x1])
    }

    #[test]
    fn test_research_warnings() {
        assert_eq!(research_warnings(0, 1, 8), vec![WARNING_NO_SOURCES.to_string()]);
        assert_eq!(research_warnings(3, 8, 8), vec![incomplete_research_warning(8)]);
        assert_eq!(research_warnings(0, 8, 8).len(), 2);
        assert!(research_warnings(2, 3, 8).is_empty());
    }

    #[tokio::test]
    async fn test_request_carries_prompt_tool_and_step_limit() {
        let observer = Arc::new(RecordingObserver::default());
        let (orchestrator, search) =
            orchestrator(StubSearchGenerator::text("summary"), observer);

        orchestrator.conduct_research(&input()).await.unwrap();

        let request = search.last_request().unwrap();
        assert_eq!(request.max_steps, 8);
        assert_eq!(request.web_search, WebSearchTool::dynamic(0.3));
        assert_eq!(request.system_prompt, RESEARCH_SYSTEM_PROMPT);
        assert!(request.user_prompt.starts_with("Launch a sale for eco sneakers"));
    }

    #[tokio::test]
    async fn test_summary_and_sources_are_collected() {
        let steps = vec![
            grounded_step(&[("https://a.example", "A")]),
            grounded_step(&[("https://a.example", "A again"), ("https://b.example", "B")]),
        ];
        let observer = Arc::new(RecordingObserver::default());
        let (orchestrator, _) = orchestrator(
            StubSearchGenerator::with_steps("Eco sneaker brand, Gen Z audience", steps),
            observer.clone(),
        );

        let result = orchestrator.conduct_research(&input()).await.unwrap();

        assert_eq!(result.summary, "Eco sneaker brand, Gen Z audience");
        assert_eq!(result.step_count, 2);
        assert_eq!(result.sources.len(), 2);
        assert!(result.warnings.is_empty());
        assert!(observer.events().contains(&PipelineEvent::ResearchCompleted {
            step_count: 2,
            source_count: 2
        }));
    }

    #[tokio::test]
    async fn test_no_sources_and_max_steps_both_warn() {
        let steps = vec![GenerationStep::default(); 8];
        let observer = Arc::new(RecordingObserver::default());
        let (orchestrator, _) =
            orchestrator(StubSearchGenerator::with_steps("partial", steps), observer.clone());

        let result = orchestrator.conduct_research(&input()).await.unwrap();

        assert_eq!(result.step_count, 8);
        assert!(result.warnings.contains(&WARNING_NO_SOURCES.to_string()));
        assert!(result.warnings.contains(&incomplete_research_warning(8)));

        let warnings = observer
            .events()
            .into_iter()
            .filter(|e| matches!(e, PipelineEvent::Warning(_)))
            .count();
        assert_eq!(warnings, 2);
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let observer = Arc::new(RecordingObserver::default());
        let (orchestrator, _) =
            orchestrator(StubSearchGenerator::failing("quota exceeded"), observer);

        let err = orchestrator.conduct_research(&input()).await.unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }
}
