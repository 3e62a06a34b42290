use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 营销简报评估维度（固定六项，顺序即规范顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ClarityOfObjectives,
    StrategicAlignment,
    TargetAudienceDefinition,
    CompetitiveAnalysis,
    ChannelStrategy,
    KeyPerformanceIndicators,
}

impl Category {
    /// 规范顺序
    pub const ALL: [Category; 6] = [
        Category::ClarityOfObjectives,
        Category::StrategicAlignment,
        Category::TargetAudienceDefinition,
        Category::CompetitiveAnalysis,
        Category::ChannelStrategy,
        Category::KeyPerformanceIndicators,
    ];

    /// 模型JSON中`breakdown`下使用的键名
    pub fn key(&self) -> &'static str {
        match self {
            Category::ClarityOfObjectives => "clarity_of_objectives",
            Category::StrategicAlignment => "strategic_alignment",
            Category::TargetAudienceDefinition => "target_audience_definition",
            Category::CompetitiveAnalysis => "competitive_analysis",
            Category::ChannelStrategy => "channel_strategy",
            Category::KeyPerformanceIndicators => "key_performance_indicators",
        }
    }

    /// 报告中展示用的标题
    pub fn title(&self) -> &'static str {
        match self {
            Category::ClarityOfObjectives => "Clarity Of Objectives",
            Category::StrategicAlignment => "Strategic Alignment",
            Category::TargetAudienceDefinition => "Target Audience Definition",
            Category::CompetitiveAnalysis => "Competitive Analysis",
            Category::ChannelStrategy => "Channel Strategy",
            Category::KeyPerformanceIndicators => "Key Performance Indicators",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// 各维度下可选的列表型抽取字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractedField {
    ExtractedObjectives,
    Keywords,
    AlignmentIssues,
    ExtractedDemographics,
    TargetAudienceExamples,
    TargetLocations,
    CompetitorsMentioned,
    CompetitiveAdvantages,
    RecommendedChannels,
    ChannelJustifications,
    ExtractedKpis,
    KpiSuggestions,
}

impl ExtractedField {
    pub const ALL: [ExtractedField; 12] = [
        ExtractedField::ExtractedObjectives,
        ExtractedField::Keywords,
        ExtractedField::AlignmentIssues,
        ExtractedField::ExtractedDemographics,
        ExtractedField::TargetAudienceExamples,
        ExtractedField::TargetLocations,
        ExtractedField::CompetitorsMentioned,
        ExtractedField::CompetitiveAdvantages,
        ExtractedField::RecommendedChannels,
        ExtractedField::ChannelJustifications,
        ExtractedField::ExtractedKpis,
        ExtractedField::KpiSuggestions,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExtractedField::ExtractedObjectives => "extracted_objectives",
            ExtractedField::Keywords => "keywords",
            ExtractedField::AlignmentIssues => "alignment_issues",
            ExtractedField::ExtractedDemographics => "extracted_demographics",
            ExtractedField::TargetAudienceExamples => "target_audience_examples",
            ExtractedField::TargetLocations => "target_locations",
            ExtractedField::CompetitorsMentioned => "competitors_mentioned",
            ExtractedField::CompetitiveAdvantages => "competitive_advantages",
            ExtractedField::RecommendedChannels => "recommended_channels",
            ExtractedField::ChannelJustifications => "channel_justifications",
            ExtractedField::ExtractedKpis => "extracted_kpis",
            ExtractedField::KpiSuggestions => "kpi_suggestions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExtractedField::ExtractedObjectives => "Extracted Objectives",
            ExtractedField::Keywords => "Keywords",
            ExtractedField::AlignmentIssues => "Alignment Issues",
            ExtractedField::ExtractedDemographics => "Extracted Demographics",
            ExtractedField::TargetAudienceExamples => "Target Audience Examples",
            ExtractedField::TargetLocations => "Target Locations",
            ExtractedField::CompetitorsMentioned => "Competitors Mentioned",
            ExtractedField::CompetitiveAdvantages => "Competitive Advantages",
            ExtractedField::RecommendedChannels => "Recommended Channels",
            ExtractedField::ChannelJustifications => "Channel Justifications",
            ExtractedField::ExtractedKpis => "Extracted KPIs",
            ExtractedField::KpiSuggestions => "KPI Suggestions",
        }
    }
}

impl Display for ExtractedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
