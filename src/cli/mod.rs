use crate::config::{Config, LLMProvider};
use crate::types::input::{BriefParseInput, Placement};
use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::PathBuf;

/// 默认配置文件名，位于当前工作目录
pub const DEFAULT_CONFIG_FILE: &str = "brief.toml";

/// Brief-RS - 由AI驱动的广告创意简报生成工具
#[derive(Parser, Debug)]
#[command(name = "brief-rs")]
#[command(
    about = "Turns a free-text campaign intent into a structured advertising creative brief, grounded in web research."
)]
#[command(version)]
pub struct Args {
    /// 投放意图原文
    #[arg(short, long)]
    pub intent: String,

    /// 行业，提供时优先于模型推断
    #[arg(long)]
    pub industry: Option<String>,

    /// 投放版位 (square_1_1, portrait_4_5, story_9_16, landscape_16_9)，可重复
    #[arg(short, long = "placement", required = true)]
    pub placements: Vec<Placement>,

    /// 需要规避的敏感词，可重复；未提供时使用模型推断的结果
    #[arg(long = "sensitive-word")]
    pub sensitive_words: Vec<String>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出文件路径，未指定时输出到stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 抽取阶段的LLM Provider (openai, anthropic, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 抽取阶段的LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 抽取阶段的LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 抽取阶段使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 调研阶段使用的模型，需要支持搜索溯源
    #[arg(long)]
    pub research_model: Option<String>,

    /// 调研阶段的API KEY
    #[arg(long)]
    pub research_api_key: Option<String>,

    /// 调研阶段的最大步数
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置，CLI参数优先于配置文件
    pub fn into_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(config_path) => Config::from_file(config_path)?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);

                if default_config_path.exists() {
                    Config::from_file(&default_config_path)?
                } else {
                    Config::default()
                }
            }
        };

        // 覆盖LLM配置
        if let Some(provider_str) = &self.llm_provider {
            config.llm.provider = provider_str.parse::<LLMProvider>().map_err(|e| anyhow!(e))?;
        }
        if let Some(llm_api_key) = &self.llm_api_key {
            config.llm.api_key = llm_api_key.clone();
        }
        if let Some(llm_api_base_url) = &self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url.clone();
        }
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }

        // 覆盖调研配置
        if let Some(research_model) = &self.research_model {
            config.research.model = research_model.clone();
        }
        if let Some(research_api_key) = &self.research_api_key {
            config.research.api_key = research_api_key.clone();
        }
        if let Some(max_steps) = self.max_steps {
            config.research.max_steps = max_steps;
        }

        config.verbose = config.verbose || self.verbose;

        config.validate()?;
        Ok(config)
    }

    /// 构建流水线输入
    pub fn to_input(&self) -> BriefParseInput {
        let mut input = BriefParseInput::new(self.intent.clone(), self.placements.clone());
        if let Some(industry) = &self.industry {
            input = input.with_industry(industry.clone());
        }
        if !self.sensitive_words.is_empty() {
            input = input.with_sensitive_words(self.sensitive_words.clone());
        }
        input
    }
}
