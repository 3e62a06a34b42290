//! LLM客户端 - 基于rig的模型调用实现

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::config::LLMConfig;
use crate::error::AnalysisError;
use crate::llm::ModelInvoker;

mod providers;

use providers::ProviderClient;

/// LLM客户端 - 提供统一的LLM服务接口
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: &LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(config)?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    /// 单轮对话，整个调用受`timeout_seconds`约束，不做重试
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self.client.create_agent(system_prompt, &self.config)?;
        let limit = Duration::from_secs(self.config.timeout_seconds);

        debug!(
            provider = %self.config.provider,
            model = %self.config.model,
            prompt_chars = user_prompt.len(),
            "sending prompt to model"
        );

        match tokio::time::timeout(limit, agent.prompt(user_prompt)).await {
            Ok(response) => response,
            Err(_) => Err(anyhow!(
                "model call timed out after {} seconds",
                self.config.timeout_seconds
            )),
        }
    }
}

#[async_trait]
impl ModelInvoker for LLMClient {
    async fn invoke(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AnalysisError> {
        self.prompt(system_prompt, user_prompt).await.map_err(|e| {
            debug!(provider = %self.config.provider, error = ?e, "model call failed");
            AnalysisError::ModelUnavailable(e.to_string())
        })
    }
}
