use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::i18n::TargetLanguage;
use crate::projector::DEFAULT_LOW_SCORE_THRESHOLD;

/// 默认配置文件名，位于当前工作目录
pub const DEFAULT_CONFIG_FILENAME: &str = "briefly.toml";

/// 默认模型与服务地址，均属于Gemini
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "mistral")]
    Mistral,
    #[serde(rename = "openrouter")]
    OpenRouter,
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
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Mistral => write!(f, "mistral"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
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
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "mistral" => Ok(LLMProvider::Mistral),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 简报文件路径（纯文本或Markdown）
    pub input_path: PathBuf,

    /// 输出路径
    pub output_path: PathBuf,

    /// 目标语言
    pub target_language: TargetLanguage,

    /// 低于该分数的维度列入改进建议
    pub low_score_threshold: u8,

    /// 分析完成后是否请求改写简报
    pub rewrite: bool,

    /// 已保存的模型原始响应，设置后跳过模型调用
    pub raw_response_path: Option<PathBuf>,

    /// LLM模型配置
    pub llm: LLMConfig,

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

    /// LLM API基地址
    pub api_base_url: String,

    /// 模型名称
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl LLMProvider {
    /// 是否通过`api_base_url`访问服务
    pub fn uses_api_base_url(&self) -> bool {
        matches!(
            self,
            LLMProvider::OpenAI | LLMProvider::Moonshot | LLMProvider::DeepSeek
        )
    }
}

impl LLMConfig {
    /// 切换provider后仍沿用Gemini默认模型或地址时报错
    pub fn check_provider_defaults(&self) -> Result<()> {
        if self.provider == LLMProvider::Gemini {
            return Ok(());
        }
        if self.model == DEFAULT_MODEL {
            bail!(
                "provider '{}' needs a model: set --model or [llm] model",
                self.provider
            );
        }
        if self.provider.uses_api_base_url() && self.api_base_url == DEFAULT_API_BASE_URL {
            bail!(
                "provider '{}' needs an API base URL: set --llm-api-base-url or [llm] api_base_url",
                self.provider
            );
        }
        Ok(())
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("brief.txt"),
            output_path: PathBuf::from("./briefly.out"),
            target_language: TargetLanguage::default(),
            low_score_threshold: DEFAULT_LOW_SCORE_THRESHOLD,
            rewrite: false,
            raw_response_path: None,
            llm: LLMConfig::default(),
            verbose: false,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("BRIEFLY_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            model: String::from(DEFAULT_MODEL),
            max_tokens: 8192,
            temperature: 0.2,
            timeout_seconds: 120,
        }
    }
}
