use std::collections::HashMap;

use crate::llm::capability::GenerationStep;
use crate::llm::grounding::CitationExtractor;
use crate::types::research::ResearchSource;

/// 从所有步骤的Provider元数据中收集引用，并按URL去重
///
/// 同一URL出现多次时以最后一次的标题与摘要为准，位置保持首次出现的位置。
pub fn collect_sources(
    steps: &[GenerationStep],
    extractor: &dyn CitationExtractor,
) -> Vec<ResearchSource> {
    let mut sources: Vec<ResearchSource> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let citations = steps
        .iter()
        .filter_map(|step| step.provider_metadata.as_ref())
        .flat_map(|metadata| extractor.extract_citations(metadata));

    for citation in citations {
        match positions.get(&citation.url) {
            Some(&index) => sources[index] = citation,
            None => {
                positions.insert(citation.url.clone(), sources.len());
                sources.push(citation);
            }
        }
    }

    sources
}
