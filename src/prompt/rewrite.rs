use serde::Serialize;
use std::collections::BTreeMap;

use crate::i18n::TargetLanguage;
use crate::types::{AnalysisResult, Category, CategoryResult};

pub const REWRITE_SYSTEM_PROMPT: &str = "You are a senior marketing strategist who rewrites marketing briefs. \
Answer with the rewritten brief only.";

/// 改写前后的对照说明
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FromTo {
    pub from: String,
    pub to: String,
}

/// 简报改写计划：发给模型的提示词，以及随改写结果一起展示的建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewritePlan {
    #[serde(skip)]
    pub prompt: String,
    pub suggestions: BTreeMap<Category, String>,
    pub from_to: BTreeMap<Category, FromTo>,
}

/// 缺少某类信息时给出的示例补充
struct MissingElement {
    examples: &'static [&'static str],
    suggestion: &'static str,
    from: &'static str,
    to: &'static str,
    instruction: &'static str,
}

fn missing_element(category: &CategoryResult) -> Option<MissingElement> {
    let extracted = category.extracted();
    match category.key() {
        Category::CompetitiveAnalysis if extracted.competitors_mentioned.is_empty() => {
            Some(MissingElement {
                examples: &["Competitor A", "Competitor B", "Competitor C"],
                suggestion: "Consider adding relevant competitors such as {} to better understand the competitive landscape.",
                from: "No competitors mentioned.",
                to: "Added relevant competitors such as {}.",
                instruction: "Add relevant competitors such as {}.",
            })
        }
        Category::TargetAudienceDefinition if extracted.extracted_demographics.is_empty() => {
            Some(MissingElement {
                examples: &[
                    "age 25-34",
                    "gender: female",
                    "location: New York",
                    "interests: fitness, wellness",
                ],
                suggestion: "Specify target demographics such as {} to tailor your strategy effectively.",
                from: "No target demographics specified.",
                to: "Included target demographics such as {}.",
                instruction: "Include target demographics such as {}.",
            })
        }
        Category::ChannelStrategy if extracted.recommended_channels.is_empty() => {
            Some(MissingElement {
                examples: &["social media", "email marketing", "paid advertising"],
                suggestion: "Include recommended channels such as {} to reach your audience more effectively.",
                from: "No recommended channels mentioned.",
                to: "Recommended channels such as {}.",
                instruction: "Recommend channels such as {}.",
            })
        }
        Category::KeyPerformanceIndicators if extracted.extracted_kpis.is_empty() => {
            Some(MissingElement {
                examples: &[
                    "conversion rate",
                    "click-through rate",
                    "customer acquisition cost",
                ],
                suggestion: "Define specific KPIs such as {} to measure the success of your campaign.",
                from: "No KPIs defined.",
                to: "Included KPIs such as {}.",
                instruction: "Include KPIs such as {}.",
            })
        }
        _ => None,
    }
}

impl RewritePlan {
    /// 根据分析结果构建改写计划
    pub fn build(brief: &str, result: &AnalysisResult, language: &TargetLanguage) -> Self {
        let mut prompt = format!(
            "## Marketing Brief Rewriter\n\nHere's an original marketing brief:\n```\n{}\n```\n\nBased on an analysis, here are some areas for improvement:\n",
            brief.trim()
        );
        let mut suggestions = BTreeMap::new();
        let mut from_to = BTreeMap::new();

        for category in result.categories() {
            prompt.push_str(&format!(
                "**{}:** {}\n",
                category.key().title(),
                category.feedback()
            ));

            match missing_element(category) {
                Some(missing) => {
                    let examples = missing.examples.join(", ");
                    suggestions.insert(category.key(), missing.suggestion.replace("{}", &examples));
                    from_to.insert(
                        category.key(),
                        FromTo {
                            from: missing.from.to_string(),
                            to: missing.to.replace("{}", &examples),
                        },
                    );
                    prompt.push_str(&missing.instruction.replace("{}", &examples));
                    prompt.push('\n');
                }
                None => {
                    from_to.insert(
                        category.key(),
                        FromTo {
                            from: category.feedback().to_string(),
                            to: format!(
                                "Enhanced {} based on feedback.",
                                category.key().title().to_lowercase()
                            ),
                        },
                    );
                }
            }
        }

        prompt.push_str(
            "\nPlease rewrite the brief, addressing the feedback provided and making it as strong as possible.\n\
             Maintain the original core message and objectives. Use crisp and clear language, and ensure the brief is detailed, actionable, and relevant.\n",
        );
        prompt.push_str(language.prompt_instruction());
        prompt.push('\n');

        Self {
            prompt,
            suggestions,
            from_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use serde_json::json;

    const WELL_FORMED: &str = include_str!("../../tests/fixtures/analysis_response.json");

    #[test]
    fn test_plan_for_complete_brief_has_no_suggestions() {
        let result = normalize(WELL_FORMED).unwrap();
        let plan = RewritePlan::build("Original brief", &result, &TargetLanguage::English);

        assert!(plan.suggestions.is_empty());
        assert_eq!(plan.from_to.len(), 6);
        assert_eq!(
            plan.from_to[&Category::StrategicAlignment].to,
            "Enhanced strategic alignment based on feedback."
        );
        assert!(plan.prompt.contains("Original brief"));
        assert!(plan.prompt.contains("**Competitive Analysis:** Competitors are named but differentiation is thin."));
    }

    #[test]
    fn test_plan_suggests_missing_elements() {
        let mut tree: serde_json::Value = serde_json::from_str(WELL_FORMED).unwrap();
        tree["breakdown"]["competitive_analysis"]["competitors_mentioned"] = json!([]);
        tree["breakdown"]["key_performance_indicators"]["extracted_kpis"] = json!(null);
        let result = normalize(&tree.to_string()).unwrap();

        let plan = RewritePlan::build("Original brief", &result, &TargetLanguage::English);

        assert_eq!(
            plan.suggestions.keys().copied().collect::<Vec<_>>(),
            vec![
                Category::CompetitiveAnalysis,
                Category::KeyPerformanceIndicators
            ]
        );
        assert_eq!(
            plan.from_to[&Category::CompetitiveAnalysis],
            FromTo {
                from: "No competitors mentioned.".to_string(),
                to: "Added relevant competitors such as Competitor A, Competitor B, Competitor C."
                    .to_string(),
            }
        );
        assert!(plan
            .prompt
            .contains("Include KPIs such as conversion rate, click-through rate, customer acquisition cost."));
    }
}
