use crate::types::input::BriefParseInput;
use crate::types::research::ResearchResult;

pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You convert marketing research into a structured advertising creative brief.
Only use information supported by the campaign intent or the research summary.
When the research is inconclusive for a field, leave that field empty instead of guessing."#;

/// 构建抽取阶段的用户提示词，意图与调研总结均原样嵌入
pub fn build_extraction_prompt(input: &BriefParseInput, research: &ResearchResult) -> String {
    format!(
        r#"## Campaign Intent
{}

## Research Summary
{}

## Task
Produce a brief object that conforms exactly to the provided schema.
Prefer leaving a field empty over guessing when the research does not settle it."#,
        input.intent_text, research.summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::input::Placement;

    #[test]
    fn test_prompt_embeds_intent_and_summary_verbatim() {
        let input = BriefParseInput::new("Launch a sale for eco sneakers", vec![Placement::Square1x1]);
        let research = ResearchResult {
            summary: "Eco sneaker brand,\nGen Z audience".to_string(),
            ..Default::default()
        };

        let prompt = build_extraction_prompt(&input, &research);

        assert!(prompt.contains("## Campaign Intent\nLaunch a sale for eco sneakers\n"));
        assert!(prompt.contains("## Research Summary\nEco sneaker brand,\nGen Z audience\n"));
        assert!(prompt.contains("leaving a field empty over guessing"));
    }
}
