use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 抽取阶段使用的LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    #[default]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// 抽取阶段的LLM模型配置
    pub llm: LLMConfig,

    /// 调研阶段（联网搜索）的模型配置
    pub research: ResearchConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址，为空时使用Provider默认地址
    pub api_base_url: String,

    /// 结构化抽取使用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,
}

/// 调研阶段配置，需要支持搜索溯源（grounding）的模型
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ResearchConfig {
    pub api_key: String,

    pub api_base_url: String,

    pub model: String,

    /// Agent循环的最大步数，是硬上限而非目标
    pub max_steps: usize,

    /// 动态检索阈值，越低越倾向于调用搜索
    pub dynamic_threshold: f64,

    pub max_output_tokens: u32,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置约束，配置文件与命令行覆盖后都需要调用
    pub fn validate(&self) -> Result<()> {
        if self.research.max_steps == 0 {
            bail!("research.max_steps must be at least 1");
        }
        Ok(())
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("BRIEF_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::new(),
            model: String::from("gemini-2.5-flash"),
            max_tokens: 8192,
        }
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GOOGLE_GENERATIVE_AI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://generativelanguage.googleapis.com/v1beta"),
            model: String::from("gemini-2.5-flash"),
            max_steps: 8,
            dynamic_threshold: 0.3,
            max_output_tokens: 8192,
            timeout_seconds: 120,
        }
    }
}
