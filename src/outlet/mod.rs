use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

use crate::analyzer::{BriefAnalysis, ImprovedBrief};
use crate::config::Config;

mod report;

pub use report::{render_improved_brief, render_report};

pub const ANALYSIS_EXPORT_FILENAME: &str = "analysis.json";
pub const IMPROVED_BRIEF_FILENAME: &str = "improved_brief.md";

/// 一次运行需要落盘的全部内容
pub struct Deliverable<'a> {
    pub analysis: &'a BriefAnalysis,
    pub improved: Option<&'a ImprovedBrief>,
}

/// 保存分析产物
pub async fn save(config: &Config, deliverable: &Deliverable<'_>) -> Result<Vec<PathBuf>> {
    let outlet = DiskOutlet::new(config);
    outlet.save(deliverable).await
}

pub trait Outlet {
    async fn save(&self, deliverable: &Deliverable<'_>) -> Result<Vec<PathBuf>>;
}

pub struct DiskOutlet {
    output_dir: PathBuf,
    report_filename: &'static str,
    low_score_threshold: u8,
}

impl DiskOutlet {
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output_path.clone(),
            report_filename: config.target_language.report_filename(),
            low_score_threshold: config.low_score_threshold,
        }
    }

    fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(filename);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("💾 已保存: {}", path.display());
        Ok(path)
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, deliverable: &Deliverable<'_>) -> Result<Vec<PathBuf>> {
        println!("\n🖊️ 分析结果存储中...");
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        let mut written = Vec::new();

        let report = render_report(deliverable.analysis, self.low_score_threshold, Utc::now());
        written.push(self.write(self.report_filename, &report)?);

        let export = serde_json::to_string_pretty(deliverable.analysis)
            .context("Failed to serialize analysis result")?;
        written.push(self.write(ANALYSIS_EXPORT_FILENAME, &export)?);

        if let Some(improved) = deliverable.improved {
            written.push(self.write(IMPROVED_BRIEF_FILENAME, &render_improved_brief(improved))?);
        }

        println!("💾 保存完成，输出目录: {}", self.output_dir.display());
        Ok(written)
    }
}
