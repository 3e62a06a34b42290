use serde_json::Value;

use crate::error::AnalysisError;

/// 严格JSON解析，失败时带回出错文本与位置
pub fn parse(text: &str) -> Result<Value, AnalysisError> {
    serde_json::from_str::<Value>(text).map_err(|e| AnalysisError::MalformedResponse {
        text: text.to_string(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}
