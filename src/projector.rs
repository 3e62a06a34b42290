//! 结果投影 - 在不可变的分析结果上派生表格行与摘要视图

use serde::Serialize;

use crate::types::{AnalysisResult, Category, ExtractedFields};

/// 低分维度的默认阈值（严格小于该值即视为需要改进）
pub const DEFAULT_LOW_SCORE_THRESHOLD: u8 = 60;

/// 表格中的一行，对应一个维度
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: Category,
    pub score: u8,
    pub feedback: String,
    pub extracted: ExtractedFields,
}

/// 总分所处区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Excellent,
    Great,
    Promising,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Excellent,
            70..=89 => ScoreBand::Great,
            50..=69 => ScoreBand::Promising,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! Your marketing brief is very strong.",
            ScoreBand::Great => "Great job! Your brief is well-structured and informative.",
            ScoreBand::Promising => {
                "Your brief shows potential, but there's room for improvement."
            }
            ScoreBand::NeedsWork => "Your brief needs significant work to be effective.",
        }
    }
}

/// 只读投影器，所有操作都不会失败，缺数据时返回空
pub struct ResultProjector<'a> {
    result: &'a AnalysisResult,
}

impl<'a> ResultProjector<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    pub fn to_rows(&self) -> Vec<CategoryRow> {
        self.result
            .categories()
            .iter()
            .map(|c| CategoryRow {
                category: c.key(),
                score: c.score(),
                feedback: c.feedback().to_string(),
                extracted: c.extracted().clone(),
            })
            .collect()
    }

    /// 竞品分析维度中提到的竞争对手
    pub fn competitors(&self) -> Vec<String> {
        self.result
            .category(Category::CompetitiveAnalysis)
            .map(|c| c.extracted().competitors_mentioned.clone())
            .unwrap_or_default()
    }

    /// 目标受众维度中的目标地区/市场
    pub fn target_locations(&self) -> Vec<String> {
        self.result
            .category(Category::TargetAudienceDefinition)
            .map(|c| c.extracted().target_locations.clone())
            .unwrap_or_default()
    }

    pub fn low_score_categories(&self, threshold: u8) -> Vec<Category> {
        self.result
            .categories()
            .iter()
            .filter(|c| c.score() < threshold)
            .map(|c| c.key())
            .collect()
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.result.overall_score())
    }
}

impl AnalysisResult {
    pub fn projector(&self) -> ResultProjector<'_> {
        ResultProjector::new(self)
    }
}
