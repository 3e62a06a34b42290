//! 模型响应规整器 - 把不可信的模型输出变成强类型的分析结果
//!
//! 流程是线性的：Raw -> Stripped -> Parsed -> Validated，任何一步失败即终止，
//! 不重试，也不会把后一步作用在被跳过的前一步输出上。

use std::fmt::Display;

use tracing::debug;

use crate::error::AnalysisError;
use crate::types::AnalysisResult;

mod parse;
mod repair;
mod strip;
mod validate;

pub use parse::parse;
pub use repair::{HeuristicRepair, JsonRepair, NoRepair};
pub use strip::strip_wrapper;
pub use validate::validate;

/// 规整流程所处阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Raw,
    Stripped,
    Parsed,
    Validated,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Raw => "raw",
            Stage::Stripped => "stripped",
            Stage::Parsed => "parsed",
            Stage::Validated => "validated",
        };
        write!(f, "{}", name)
    }
}

/// 响应规整器，修复能力可替换
#[derive(Debug, Clone, Default)]
pub struct Normalizer<R = HeuristicRepair> {
    repairer: R,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: JsonRepair> Normalizer<R> {
    pub fn with_repair(repairer: R) -> Self {
        Self { repairer }
    }

    /// 执行 strip -> repair -> parse -> validate
    pub fn normalize(&self, raw: &str) -> Result<AnalysisResult, AnalysisError> {
        debug!(stage = %Stage::Raw, bytes = raw.len(), "normalizing model response");

        let stripped = strip_wrapper(raw);
        debug!(stage = %Stage::Stripped, bytes = stripped.len());

        let repaired = self.repairer.repair(&stripped);
        if repaired != stripped {
            debug!(before = stripped.len(), after = repaired.len(), "response text repaired");
        }

        let tree = parse(&repaired).inspect_err(|e| {
            debug!(stage = %Stage::Stripped, error = %e, "model response is not valid JSON");
        })?;
        debug!(stage = %Stage::Parsed);

        let result = validate(&tree).inspect_err(|e| {
            debug!(stage = %Stage::Parsed, error = %e, "model response failed schema validation");
        })?;
        debug!(
            stage = %Stage::Validated,
            overall_score = result.overall_score(),
            "model response normalized"
        );

        Ok(result)
    }
}

/// 使用默认启发式修复器规整一段模型输出
pub fn normalize(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    Normalizer::new().normalize(raw)
}

// Include tests
#[cfg(test)]
mod tests;
