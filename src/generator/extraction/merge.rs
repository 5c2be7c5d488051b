use crate::types::brief::Brief;
use crate::types::input::BriefParseInput;

/// 合并调用方输入与模型抽取结果，调用方的值优先
///
/// - industry：调用方提供则使用调用方的值
/// - placements：整体替换为调用方的版位
/// - compliance.sensitive_words：调用方提供则使用调用方的列表
/// - proposed_hook：模型未给出时回落为意图原文
/// - 其余字段保持模型抽取结果
pub fn merge_brief(input: &BriefParseInput, extracted: Brief) -> Brief {
    let mut brief = extracted;

    if let Some(industry) = &input.industry {
        brief.industry = Some(industry.clone());
    }

    brief.placements = input.placements.clone();

    if let Some(words) = &input.sensitive_words {
        brief.compliance.sensitive_words = words.clone();
    }

    if brief.proposed_hook.is_none() {
        brief.proposed_hook = Some(input.intent_text.clone());
    }

    brief
}
