use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 简报流水线的机器可读错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiBriefErrorCode {
    /// 抽取阶段没有得到符合Schema的对象
    #[serde(rename = "BRIEF_EXTRACTION_FAILED")]
    BriefExtractionFailed,
}

impl AiBriefErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiBriefErrorCode::BriefExtractionFailed => "BRIEF_EXTRACTION_FAILED",
        }
    }
}

impl std::fmt::Display for AiBriefErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 简报流水线自身定义的错误
///
/// 以 `anyhow::Error` 向上传播，调用方通过 `downcast_ref::<AiBriefError>()` 识别。
/// 模型服务的网络错误等不会被包装成该类型。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("[{code}] {message}")]
pub struct AiBriefError {
    pub message: String,
    pub code: AiBriefErrorCode,
}

impl AiBriefError {
    pub fn new(code: AiBriefErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn extraction_failed() -> Self {
        Self::new(
            AiBriefErrorCode::BriefExtractionFailed,
            "Failed to extract a structured brief from the research summary",
        )
    }
}
