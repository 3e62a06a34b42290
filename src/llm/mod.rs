//! 模型调用边界：异步只存在于这一层

use async_trait::async_trait;

use crate::error::AnalysisError;

pub mod client;

pub use client::LLMClient;

/// 把(system, user)提示词交给模型并取回原始文本
///
/// 任何传输失败或超时都应表现为`AnalysisError::ModelUnavailable`。
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, system_prompt: &str, user_prompt: &str) -> Result<String, AnalysisError>;
}
