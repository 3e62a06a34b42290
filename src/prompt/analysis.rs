use crate::i18n::TargetLanguage;

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a senior marketing strategist who reviews marketing briefs. \
You always answer with a single JSON object that follows the requested format exactly, without any commentary.";

const ANALYSIS_TEMPLATE: &str = r#"## Marketing Brief Analysis Request

Please analyze the following marketing brief and provide a structured response suitable for machine processing, with scores as integers out of 100.
Extract specific details and insights where possible.

**Marketing Brief Text:**

```
__BRIEF__
```

**Response Format:**

```json
{
  "overall_score": <score>,
  "breakdown": {
    "clarity_of_objectives": {
      "score": <score>,
      "feedback": "<feedback>",
      "extracted_objectives": ["list of extracted objectives from the text"],
      "keywords": ["list of relevant keywords"]
    },
    "strategic_alignment": {
      "score": <score>,
      "feedback": "<feedback>",
      "alignment_issues": ["list of potential misalignments with business goals (if any)"]
    },
    "target_audience_definition": {
      "score": <score>,
      "feedback": "<feedback>",
      "extracted_demographics": ["age", "location", "interests", "other relevant demographics"],
      "target_audience_examples": ["specific examples of the target audience mentioned in the text"],
      "target_locations": ["countries, regions, cities or markets the brief targets"]
    },
    "competitive_analysis": {
      "score": <score>,
      "feedback": "<feedback>",
      "competitors_mentioned": ["list of competitor brands mentioned"],
      "competitive_advantages": ["list of mentioned or implied competitive advantages"]
    },
    "channel_strategy": {
      "score": <score>,
      "feedback": "<feedback>",
      "recommended_channels": ["list of potentially effective channels based on the brief"],
      "channel_justifications": ["reasons for recommending each channel"]
    },
    "key_performance_indicators": {
      "score": <score>,
      "feedback": "<feedback>",
      "extracted_kpis": ["list of KPIs mentioned in the brief"],
      "kpi_suggestions": ["suggestions for additional relevant KPIs"]
    }
  },
  "gap_analysis": [
    "List of missing elements (if any)",
    "Another missing element"
  ]
}
```

Keep every JSON key exactly as shown. __LANGUAGE__
"#;

/// 生成简报分析提示词，模板固定，只嵌入简报正文与输出语言要求
pub fn build_analysis_prompt(brief: &str, language: &TargetLanguage) -> String {
    ANALYSIS_TEMPLATE
        .replace("__LANGUAGE__", language.prompt_instruction())
        .replace("__BRIEF__", brief.trim())
}
