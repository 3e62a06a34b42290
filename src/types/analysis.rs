use serde::Serialize;

use super::category::{Category, ExtractedField};

/// 单个维度下抽取出的全部列表字段，字段缺失时为空列表而不是缺省
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub extracted_objectives: Vec<String>,
    pub keywords: Vec<String>,
    pub alignment_issues: Vec<String>,
    pub extracted_demographics: Vec<String>,
    pub target_audience_examples: Vec<String>,
    pub target_locations: Vec<String>,
    pub competitors_mentioned: Vec<String>,
    pub competitive_advantages: Vec<String>,
    pub recommended_channels: Vec<String>,
    pub channel_justifications: Vec<String>,
    pub extracted_kpis: Vec<String>,
    pub kpi_suggestions: Vec<String>,
}

impl ExtractedFields {
    pub fn get(&self, field: ExtractedField) -> &[String] {
        match field {
            ExtractedField::ExtractedObjectives => &self.extracted_objectives,
            ExtractedField::Keywords => &self.keywords,
            ExtractedField::AlignmentIssues => &self.alignment_issues,
            ExtractedField::ExtractedDemographics => &self.extracted_demographics,
            ExtractedField::TargetAudienceExamples => &self.target_audience_examples,
            ExtractedField::TargetLocations => &self.target_locations,
            ExtractedField::CompetitorsMentioned => &self.competitors_mentioned,
            ExtractedField::CompetitiveAdvantages => &self.competitive_advantages,
            ExtractedField::RecommendedChannels => &self.recommended_channels,
            ExtractedField::ChannelJustifications => &self.channel_justifications,
            ExtractedField::ExtractedKpis => &self.extracted_kpis,
            ExtractedField::KpiSuggestions => &self.kpi_suggestions,
        }
    }

    pub(crate) fn set(&mut self, field: ExtractedField, values: Vec<String>) {
        let slot = match field {
            ExtractedField::ExtractedObjectives => &mut self.extracted_objectives,
            ExtractedField::Keywords => &mut self.keywords,
            ExtractedField::AlignmentIssues => &mut self.alignment_issues,
            ExtractedField::ExtractedDemographics => &mut self.extracted_demographics,
            ExtractedField::TargetAudienceExamples => &mut self.target_audience_examples,
            ExtractedField::TargetLocations => &mut self.target_locations,
            ExtractedField::CompetitorsMentioned => &mut self.competitors_mentioned,
            ExtractedField::CompetitiveAdvantages => &mut self.competitive_advantages,
            ExtractedField::RecommendedChannels => &mut self.recommended_channels,
            ExtractedField::ChannelJustifications => &mut self.channel_justifications,
            ExtractedField::ExtractedKpis => &mut self.extracted_kpis,
            ExtractedField::KpiSuggestions => &mut self.kpi_suggestions,
        };
        *slot = values;
    }

    /// 非空字段，按固定字段顺序
    pub fn non_empty(&self) -> impl Iterator<Item = (ExtractedField, &[String])> {
        ExtractedField::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .filter(|(_, values)| !values.is_empty())
    }
}

/// 单个维度的评估结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    key: Category,
    score: u8,
    feedback: String,
    extracted: ExtractedFields,
}

impl CategoryResult {
    pub(crate) fn new(key: Category, score: u8, feedback: String, extracted: ExtractedFields) -> Self {
        Self {
            key,
            score,
            feedback,
            extracted,
        }
    }

    pub fn key(&self) -> Category {
        self.key
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn extracted(&self) -> &ExtractedFields {
        &self.extracted
    }
}

/// 一次简报分析的完整结果
///
/// 只能由校验流程构建，构建后不可变：六个维度齐全且按规范顺序排列，
/// 所有分数都在`0..=100`之间。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    overall_score: u8,
    categories: Vec<CategoryResult>,
    gaps: Vec<String>,
}

impl AnalysisResult {
    pub(crate) fn new(overall_score: u8, categories: Vec<CategoryResult>, gaps: Vec<String>) -> Self {
        Self {
            overall_score,
            categories,
            gaps,
        }
    }

    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    pub fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    pub fn category(&self, key: Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// 缺失要素列表（gap analysis）
    pub fn gaps(&self) -> &[String] {
        &self.gaps
    }
}
