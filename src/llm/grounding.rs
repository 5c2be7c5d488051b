//! 搜索溯源（grounding）元数据解析
//!
//! 不同Provider的溯源元数据结构各不相同，流水线只依赖 [`CitationExtractor`] 这一窄接口。

use serde_json::Value;

use crate::types::research::ResearchSource;

/// 从单步生成的Provider元数据中提取零到多条引用
pub trait CitationExtractor: Send + Sync {
    fn extract_citations(&self, metadata: &Value) -> Vec<ResearchSource>;
}

/// Gemini的groundingMetadata解析器
///
/// 兼容三种挂载位置：`google.groundingMetadata`、`groundingMetadata`，或元数据本身就是groundingMetadata。
#[derive(Debug, Clone, Default)]
pub struct GeminiGroundingExtractor;

impl GeminiGroundingExtractor {
    fn grounding_metadata(metadata: &Value) -> Option<&Value> {
        if let Some(nested) = metadata.pointer("/google/groundingMetadata") {
            return Some(nested);
        }
        if let Some(direct) = metadata.get("groundingMetadata") {
            return Some(direct);
        }
        metadata.get("groundingChunks").map(|_| metadata)
    }

    fn chunk_to_source(chunk: &Value) -> Option<ResearchSource> {
        let web = chunk.get("web");
        let retrieved = chunk.get("retrievedContext");

        let uri = web
            .and_then(|w| w.get("uri"))
            .or_else(|| retrieved.and_then(|r| r.get("uri")))
            .and_then(Value::as_str)
            .filter(|uri| !uri.is_empty())?;

        let mut source = ResearchSource::new(uri);

        if let Some(title) = web
            .and_then(|w| w.get("title"))
            .or_else(|| retrieved.and_then(|r| r.get("title")))
            .and_then(Value::as_str)
        {
            source = source.with_title(title);
        }

        if let Some(text) = retrieved.and_then(|r| r.get("text")).and_then(Value::as_str) {
            source = source.with_snippet(text);
        }

        Some(source)
    }
}

impl CitationExtractor for GeminiGroundingExtractor {
    fn extract_citations(&self, metadata: &Value) -> Vec<ResearchSource> {
        let Some(chunks) = Self::grounding_metadata(metadata)
            .and_then(|gm| gm.get("groundingChunks"))
            .and_then(Value::as_array)
        else {
            return vec![];
        };

        chunks.iter().filter_map(Self::chunk_to_source).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_web_chunks() {
        let metadata = json!({
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://a.example", "title": "A" } },
                    { "web": { "uri": "https://b.example" } }
                ]
            }
        });

        let sources = GeminiGroundingExtractor.extract_citations(&metadata);

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].url, "https://a.example");
        assert_eq!(sources[0].title.as_deref(), Some("A"));
        assert_eq!(sources[1].title, None);
    }

    #[test]
    fn test_accepts_nested_provider_metadata() {
        let metadata = json!({
            "google": {
                "groundingMetadata": {
                    "groundingChunks": [ { "web": { "uri": "https://nested.example" } } ]
                }
            }
        });

        let sources = GeminiGroundingExtractor.extract_citations(&metadata);
        assert_eq!(sources, vec![ResearchSource::new("https://nested.example")]);
    }

    #[test]
    fn test_skips_chunks_without_uri() {
        let metadata = json!({
            "groundingChunks": [
                { "web": { "title": "no uri" } },
                { "retrievedContext": { "text": "orphan snippet" } },
                { "web": { "uri": "" } },
                { "web": { "uri": "https://kept.example" } }
            ]
        });

        let sources = GeminiGroundingExtractor.extract_citations(&metadata);

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].url, "https://kept.example");
    }

    #[test]
    fn test_retrieved_context_snippet_is_truncated() {
        let text = "x".repeat(500);
        let metadata = json!({
            "groundingMetadata": {
                "groundingChunks": [
                    { "retrievedContext": { "uri": "https://doc.example", "title": "Doc", "text": text } }
                ]
            }
        });

        let sources = GeminiGroundingExtractor.extract_citations(&metadata);

        assert_eq!(sources[0].title.as_deref(), Some("Doc"));
        assert_eq!(sources[0].snippet.as_ref().map(|s| s.chars().count()), Some(200));
    }

    #[test]
    fn test_unrelated_metadata_yields_nothing() {
        assert!(
            GeminiGroundingExtractor
                .extract_citations(&json!({ "usage": { "tokens": 10 } }))
                .is_empty()
        );
        assert!(GeminiGroundingExtractor.extract_citations(&Value::Null).is_empty());
    }
}
