use chrono::{DateTime, Utc};

use crate::analyzer::{BriefAnalysis, ImprovedBrief};
use crate::projector::ScoreBand;
use crate::types::ExtractedFields;

/// 表格单元格中不能出现竖线和换行
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn extracted_summary(extracted: &ExtractedFields) -> String {
    extracted
        .non_empty()
        .map(|(field, values)| format!("{}: {}", field.label(), values.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

fn bullet_list(content: &mut String, items: &[String], empty: &str) {
    if items.is_empty() {
        content.push_str(&format!("{}\n", empty));
    } else {
        for item in items {
            content.push_str(&format!("- {}\n", item));
        }
    }
    content.push('\n');
}

/// 渲染简报分析报告（Markdown）
pub fn render_report(
    analysis: &BriefAnalysis,
    low_score_threshold: u8,
    generated_at: DateTime<Utc>,
) -> String {
    let result = &analysis.result;
    let projector = result.projector();
    let band = ScoreBand::from_score(result.overall_score());

    let mut content = String::new();
    content.push_str("# Marketing Brief Analysis\n\n");
    content.push_str(&format!(
        "Generated at: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    content.push_str("## Overall Score\n\n");
    content.push_str(&format!("**{} / 100**\n\n", result.overall_score()));
    content.push_str(&format!("{}\n\n", band.message()));

    content.push_str("## Detailed Analysis\n\n");
    content.push_str("| Category | Score | Feedback | Extracted |\n");
    content.push_str("|---|---|---|---|\n");
    for row in projector.to_rows() {
        content.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.category.title(),
            row.score,
            cell(&row.feedback),
            cell(&extracted_summary(&row.extracted)),
        ));
    }
    content.push('\n');

    content.push_str("## Competitors\n\n");
    bullet_list(&mut content, &projector.competitors(), "No competitors mentioned.");

    content.push_str("## Target Locations\n\n");
    bullet_list(
        &mut content,
        &projector.target_locations(),
        "No target locations mentioned.",
    );

    content.push_str("## Sentiment\n\n");
    content.push_str(&format!(
        "- **Polarity**: {:.2}\n- **Subjectivity**: {:.2}\n\n",
        analysis.sentiment.polarity, analysis.sentiment.subjectivity
    ));
    content.push_str(&format!("{}\n\n", analysis.interpretation.polarity_text));
    content.push_str(&format!("{}\n\n", analysis.interpretation.subjectivity_text));

    content.push_str("## Gap Analysis\n\n");
    bullet_list(&mut content, result.gaps(), "No gaps identified.");

    content.push_str("## Actionable Insights\n\n");
    let low = projector.low_score_categories(low_score_threshold);
    if low.is_empty() {
        content.push_str(&format!(
            "Every category scores at least {}.\n",
            low_score_threshold
        ));
    }
    for category in low {
        let Some(detail) = result.category(category) else {
            continue;
        };
        content.push_str(&format!(
            "### {} ({} / 100)\n\n{}\n\n",
            category.title(),
            detail.score(),
            detail.feedback()
        ));
        for (field, values) in detail.extracted().non_empty() {
            content.push_str(&format!("- **{}**: {}\n", field.label(), values.join(", ")));
        }
        content.push('\n');
    }

    content.trim_end().to_string() + "\n"
}

/// 渲染改写后的简报及其改进说明
pub fn render_improved_brief(improved: &ImprovedBrief) -> String {
    let mut content = String::new();
    content.push_str("# Improved Marketing Brief\n\n");
    content.push_str(improved.text.trim());
    content.push_str("\n\n");

    if !improved.suggestions.is_empty() {
        content.push_str("## Suggestions\n\n");
        for (category, suggestion) in &improved.suggestions {
            content.push_str(&format!("- **{}**: {}\n", category.title(), suggestion));
        }
        content.push('\n');
    }

    content.push_str("## What Changed\n\n");
    for (category, change) in &improved.from_to {
        content.push_str(&format!(
            "### {}\n\n- **From**: {}\n- **To**: {}\n\n",
            category.title(),
            change.from,
            change.to
        ));
    }

    content.trim_end().to_string() + "\n"
}
