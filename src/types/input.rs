use std::fmt::{Display, Formatter};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 广告投放版位（固定枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Placement {
    /// 1:1 方图
    #[serde(rename = "square_1_1")]
    Square1x1,
    /// 4:5 竖版信息流
    #[serde(rename = "portrait_4_5")]
    Portrait4x5,
    /// 9:16 全屏故事
    #[serde(rename = "story_9_16")]
    Story9x16,
    /// 16:9 横版
    #[serde(rename = "landscape_16_9")]
    Landscape16x9,
}

impl Placement {
    pub const ALL: [Placement; 4] = [
        Placement::Square1x1,
        Placement::Portrait4x5,
        Placement::Story9x16,
        Placement::Landscape16x9,
    ];

    /// 版位标识符，与序列化格式一致
    pub fn id(&self) -> &'static str {
        match self {
            Placement::Square1x1 => "square_1_1",
            Placement::Portrait4x5 => "portrait_4_5",
            Placement::Story9x16 => "story_9_16",
            Placement::Landscape16x9 => "landscape_16_9",
        }
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Placement::ALL
            .into_iter()
            .find(|placement| placement.id() == normalized)
            .ok_or_else(|| format!("Unknown placement: {}", s))
    }
}

/// 输入校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("intent text must not be empty")]
    EmptyIntent,
    #[error("at least one placement is required")]
    NoPlacements,
}

/// 调用方提交的简报解析请求，在一次流水线运行期间保持不变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefParseInput {
    /// 自由文本的投放意图
    pub intent_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// 目标版位，有序且非空
    pub placements: Vec<Placement>,
    /// 需要规避的敏感词
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive_words: Option<Vec<String>>,
}

impl BriefParseInput {
    pub fn new(intent_text: impl Into<String>, placements: Vec<Placement>) -> Self {
        Self {
            intent_text: intent_text.into(),
            industry: None,
            placements,
            sensitive_words: None,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_sensitive_words(mut self, words: Vec<String>) -> Self {
        self.sensitive_words = Some(words);
        self
    }

    /// 校验请求的基本约束（意图非空、版位非空）
    pub fn validate(&self) -> Result<(), InputError> {
        if self.intent_text.trim().is_empty() {
            return Err(InputError::EmptyIntent);
        }
        if self.placements.is_empty() {
            return Err(InputError::NoPlacements);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_ids_round_trip_through_from_str() {
        for placement in Placement::ALL {
            assert_eq!(placement.id().parse::<Placement>().unwrap(), placement);
        }
        assert_eq!(" Square_1_1 ".parse::<Placement>().unwrap(), Placement::Square1x1);
        assert!("billboard".parse::<Placement>().is_err());
    }

    #[test]
    fn test_placement_serializes_as_id() {
        let json = serde_json::to_string(&vec![Placement::Story9x16]).unwrap();
        assert_eq!(json, r#"["story_9_16"]"#);
    }

    #[test]
    fn test_input_deserializes_camel_case() {
        let input: BriefParseInput = serde_json::from_str(
            r#"{"intentText":"Launch","placements":["square_1_1"],"sensitiveWords":["cheap"]}"#,
        )
        .unwrap();

        assert_eq!(input.intent_text, "Launch");
        assert_eq!(input.industry, None);
        assert_eq!(input.placements, vec![Placement::Square1x1]);
        assert_eq!(input.sensitive_words, Some(vec!["cheap".to_string()]));
    }

    #[test]
    fn test_validate() {
        let input = BriefParseInput::new("Launch a sale", vec![Placement::Square1x1]);
        assert!(input.validate().is_ok());

        let empty_intent = BriefParseInput::new("   ", vec![Placement::Square1x1]);
        assert_eq!(empty_intent.validate(), Err(InputError::EmptyIntent));

        let no_placements = BriefParseInput::new("Launch a sale", vec![]);
        assert_eq!(no_placements.validate(), Err(InputError::NoPlacements));
    }
}
