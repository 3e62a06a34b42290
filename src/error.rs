use std::fmt::Display;

use crate::types::Category;

/// 字段校验失败的具体原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    WrongType { expected: &'static str },
    OutOfRange { value: i128 },
    Empty,
}

impl Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "field is missing"),
            ViolationKind::WrongType { expected } => write!(f, "expected {}", expected),
            ViolationKind::OutOfRange { value } => {
                write!(f, "value {} is outside 0..=100", value)
            }
            ViolationKind::Empty => write!(f, "field is empty"),
        }
    }
}

/// 简报分析失败的原因，三种都会终止本次分析
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// 修复后仍无法按JSON解析
    #[error("malformed model response at line {line}, column {column}: {message}")]
    MalformedResponse {
        text: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// JSON合法，但缺少必填字段、类型错误或分数越界
    #[error("schema violation at {}: {kind}", violation_path(.category, .field))]
    SchemaViolation {
        category: Option<Category>,
        field: String,
        kind: ViolationKind,
    },

    /// 模型调用在产出文本之前就失败了
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
}

fn violation_path(category: &Option<Category>, field: &str) -> String {
    match category {
        Some(category) if field.is_empty() => format!("breakdown.{}", category.key()),
        Some(category) => format!("breakdown.{}.{}", category.key(), field),
        None => field.to_string(),
    }
}

impl AnalysisError {
    pub(crate) fn violation(
        category: Option<Category>,
        field: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        AnalysisError::SchemaViolation {
            category,
            field: field.into(),
            kind,
        }
    }

    /// 面向最终用户的一句话说明，不包含原始响应内容
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::MalformedResponse { .. } | AnalysisError::SchemaViolation { .. } => {
                "The model's answer could not be understood. Please try again."
            }
            AnalysisError::ModelUnavailable(_) => {
                "The model could not be reached. Please check your connection and API settings."
            }
        }
    }
}
