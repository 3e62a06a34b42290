use crate::config::{Config, DEFAULT_CONFIG_FILENAME, LLMProvider};
use crate::i18n::TargetLanguage;
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;

/// Briefly - 由LLM驱动的营销简报分析工具
#[derive(Parser, Debug)]
#[command(name = "briefly")]
#[command(
    about = "Scores a marketing brief across six strategic categories with an LLM, extracts competitors, audiences and KPIs, and writes a Markdown report."
)]
#[command(version)]
pub struct Args {
    /// 简报文件路径（.txt / .md）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 分析完成后改写简报
    #[arg(long)]
    pub rewrite: bool,

    /// 使用已保存的模型原始响应，跳过模型调用
    #[arg(long)]
    pub raw_response: Option<PathBuf>,

    /// 低分阈值，低于该分数的维度会出现在改进建议中
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub low_score_threshold: Option<u8>,

    /// 模型名称
    #[arg(long)]
    pub model: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 模型调用超时（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// LLM Provider (openai, moonshot, deepseek, mistral, openrouter, anthropic, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// 目标语言 (zh, en, ja, ko, de, fr, ru)
    #[arg(long)]
    pub target_language: Option<String>,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            // 显式指定的配置文件必须可读
            Config::from_file(config_path)
                .with_context(|| format!("无法读取配置文件 {:?}", config_path))?
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(DEFAULT_CONFIG_FILENAME);

            if default_config_path.exists() {
                Config::from_file(&default_config_path)
                    .with_context(|| format!("无法读取默认配置文件 {:?}", default_config_path))?
            } else {
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(raw_response) = self.raw_response {
            config.raw_response_path = Some(raw_response);
        }
        if let Some(threshold) = self.low_score_threshold {
            config.low_score_threshold = threshold;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            config.llm.provider = provider_str
                .parse::<LLMProvider>()
                .map_err(|e| anyhow!(e))?;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.llm.timeout_seconds = timeout_seconds;
        }

        // 目标语言配置
        if let Some(target_language_str) = self.target_language {
            config.target_language = target_language_str
                .parse::<TargetLanguage>()
                .map_err(|e| anyhow!(e))?;
        }

        // 命令行开关只会打开，不会关闭配置文件中的设置
        config.rewrite |= self.rewrite;
        config.verbose |= self.verbose;

        // 离线分析且不改写时不会调用模型
        if config.raw_response_path.is_none() || config.rewrite {
            config.llm.check_provider_defaults()?;
        }

        Ok(config)
    }
}
