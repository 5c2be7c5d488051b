use crate::types::input::BriefParseInput;

pub const RESEARCH_SYSTEM_PROMPT: &str = r#"You are a senior marketing strategist preparing the research behind an advertising creative brief.
Use web search whenever it helps you ground a claim, and prefer recent, authoritative sources.
Write a factual research summary in plain prose. Do not invent facts; say so when something could not be verified."#;

const RESEARCH_INSTRUCTIONS: &str = r#"Research the following and summarize what you find:
1. Brand: who is behind this campaign, their positioning and product line.
2. Industry: market trends and category conventions that matter for the creative.
3. Competitors: the main competitors and how they advertise.
4. Audience: the most likely target audience, their demographics and interests.
5. Compliance: advertising regulations, platform policies and claims to avoid for this category."#;

/// 构建调研阶段的用户提示词：意图原文 + 已知上下文 + 固定调研指令
pub fn build_research_prompt(input: &BriefParseInput) -> String {
    let mut prompt = String::new();

    prompt.push_str(&input.intent_text);
    prompt.push_str("\n\n");

    let mut known_context = Vec::new();
    if let Some(industry) = &input.industry {
        known_context.push(format!("- Industry: {}", industry));
    }
    if !input.placements.is_empty() {
        let placements = input
            .placements
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
            .join(", ");
        known_context.push(format!("- Placements: {}", placements));
    }
    if let Some(words) = &input.sensitive_words
        && !words.is_empty()
    {
        known_context.push(format!("- Sensitive words to avoid: {}", words.join(", ")));
    }

    if !known_context.is_empty() {
        prompt.push_str("Known Context:\n");
        prompt.push_str(&known_context.join("\n"));
        prompt.push_str("\n\n");
    }

    prompt.push_str(RESEARCH_INSTRUCTIONS);
    prompt
}
