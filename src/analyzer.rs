//! 简报分析器 - 串起提示词、模型调用、响应规整与语气分析

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::i18n::TargetLanguage;
use crate::llm::ModelInvoker;
use crate::normalizer::{Normalizer, strip_wrapper};
use crate::prompt::{
    ANALYSIS_SYSTEM_PROMPT, FromTo, REWRITE_SYSTEM_PROMPT, RewritePlan, build_analysis_prompt,
};
use crate::sentiment::{SentimentInterpretation, SentimentScore, analyze_sentiment, interpret_sentiment};
use crate::types::{AnalysisResult, Category};

/// 一次分析的全部产出
#[derive(Debug, Clone, Serialize)]
pub struct BriefAnalysis {
    pub result: AnalysisResult,
    pub sentiment: SentimentScore,
    pub interpretation: SentimentInterpretation,
}

impl BriefAnalysis {
    /// 从已有的模型原始响应构建分析结果，不经过模型调用
    pub fn from_response(
        brief: &str,
        raw: &str,
        normalizer: &Normalizer,
    ) -> Result<Self, AnalysisError> {
        let result = normalizer.normalize(raw)?;
        let sentiment = analyze_sentiment(brief);
        debug!(
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            "brief sentiment estimated"
        );

        Ok(Self {
            result,
            sentiment,
            interpretation: interpret_sentiment(sentiment),
        })
    }
}

/// 改写后的简报
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImprovedBrief {
    pub text: String,
    pub suggestions: BTreeMap<Category, String>,
    pub from_to: BTreeMap<Category, FromTo>,
}

pub struct BriefAnalyzer<I> {
    invoker: I,
    normalizer: Normalizer,
    language: TargetLanguage,
}

impl<I: ModelInvoker> BriefAnalyzer<I> {
    pub fn new(invoker: I, language: TargetLanguage) -> Self {
        Self {
            invoker,
            normalizer: Normalizer::new(),
            language,
        }
    }

    pub async fn analyze(&self, brief: &str) -> Result<BriefAnalysis, AnalysisError> {
        let prompt = build_analysis_prompt(brief, &self.language);
        info!(language = %self.language, brief_chars = brief.len(), "requesting brief analysis");

        let raw = self.invoker.invoke(ANALYSIS_SYSTEM_PROMPT, &prompt).await?;
        BriefAnalysis::from_response(brief, &raw, &self.normalizer)
    }

    /// 基于分析结果请求模型改写简报
    pub async fn rewrite(
        &self,
        brief: &str,
        result: &AnalysisResult,
    ) -> Result<ImprovedBrief, AnalysisError> {
        let plan = RewritePlan::build(brief, result, &self.language);
        info!(suggestions = plan.suggestions.len(), "requesting brief rewrite");

        let raw = self.invoker.invoke(REWRITE_SYSTEM_PROMPT, &plan.prompt).await?;
        let text = strip_wrapper(&raw);
        if text.is_empty() {
            return Err(AnalysisError::MalformedResponse {
                text: raw,
                line: 1,
                column: 1,
                message: "the rewrite response is empty".to_string(),
            });
        }

        Ok(ImprovedBrief {
            text,
            suggestions: plan.suggestions,
            from_to: plan.from_to,
        })
    }
}
