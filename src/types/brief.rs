use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::input::Placement;

/// 结构化的广告简报，同时作为抽取阶段的目标Schema
///
/// 所有列表字段缺省为空数组，序列化时始终输出，不会出现null。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Brief {
    /// 所属行业
    pub industry: Option<String>,
    /// 投放目标，如拉新、促销、品牌认知
    pub objective: Option<String>,
    /// 目标受众
    pub audience: Option<Audience>,
    /// 核心卖点
    pub key_benefits: Vec<String>,
    /// 建议的广告钩子文案
    pub proposed_hook: Option<String>,
    /// 行动号召
    pub call_to_action: Option<String>,
    /// 创意风格
    pub style: BriefStyle,
    /// 投放渠道
    pub channels: Vec<String>,
    /// 投放版位
    pub placements: Vec<Placement>,
    /// 合规约束
    pub compliance: Compliance,
}

/// 目标受众画像
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Audience {
    /// 年龄区间，例如 "18-24"
    pub age_range: Option<String>,
    /// 地域
    pub geo: Option<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BriefStyle {
    /// 语气调性
    pub tone: Option<String>,
    pub keywords: Vec<String>,
    /// 参考品牌或参考作品
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Compliance {
    /// 创意中禁止出现的敏感词
    pub sensitive_words: Vec<String>,
    /// 合规备注，如行业监管要求
    pub notes: Option<String>,
}
