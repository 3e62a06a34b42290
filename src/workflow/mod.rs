use anyhow::{Context, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::analyzer::{BriefAnalysis, BriefAnalyzer, ImprovedBrief};
use crate::config::Config;
use crate::error::AnalysisError;
use crate::llm::LLMClient;
use crate::normalizer::Normalizer;
use crate::outlet::{self, Deliverable};
use crate::source::read_brief;

/// 时间跟踪作用域
pub struct TimingScope {
    start_time: Instant,
    phase_start_times: HashMap<&'static str, Instant>,
    phase_durations: Vec<(&'static str, Duration)>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase_start_times: HashMap::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &'static str) {
        self.phase_start_times.insert(phase_name, Instant::now());
    }

    /// 结束一个阶段的计时
    pub fn end_phase(&mut self, phase_name: &'static str) -> Option<Duration> {
        let start_time = self.phase_start_times.remove(phase_name)?;
        let duration = start_time.elapsed();
        self.phase_durations.push((phase_name, duration));
        Some(duration)
    }

    /// 按阶段结束顺序返回耗时
    pub fn get_phase_durations(&self) -> &[(&'static str, Duration)] {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let mut report = format!(
            "总执行时间: {:.2}秒\n",
            self.start_time.elapsed().as_secs_f64()
        );
        for (phase, duration) in &self.phase_durations {
            report.push_str(&format!("- {}: {:.3}秒\n", phase, duration.as_secs_f64()));
        }
        report
    }
}

/// 时间跟踪常量
pub struct TimingKeys;

impl TimingKeys {
    pub const READ: &'static str = "read";
    pub const ANALYZE: &'static str = "analyze";
    pub const REWRITE: &'static str = "rewrite";
    pub const OUTPUT: &'static str = "output";
}

/// 向用户给出一句话的失败原因，带响应原文的细节只进入debug日志
fn surface(err: AnalysisError) -> anyhow::Error {
    debug!(error = ?err, "brief analysis failed");
    eprintln!("❌ {}", err.user_message());
    anyhow::Error::new(err)
}

/// 错误是否已由`launch`向用户说明过，调用方不应再次打印
pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<AnalysisError>().is_some()
}

/// 启动简报分析工作流
pub async fn launch(config: &Config) -> Result<()> {
    let mut timing = TimingScope::new();

    timing.start_phase(TimingKeys::READ);
    println!("📄 读取简报: {}", config.input_path.display());
    let brief = read_brief(&config.input_path)?;
    timing.end_phase(TimingKeys::READ);

    // 只有真正需要调用模型时才创建客户端
    let needs_model = config.raw_response_path.is_none() || config.rewrite;
    let analyzer = if needs_model {
        Some(BriefAnalyzer::new(
            LLMClient::new(&config.llm).context("Failed to create LLM client")?,
            config.target_language.clone(),
        ))
    } else {
        None
    };

    timing.start_phase(TimingKeys::ANALYZE);
    let outcome = match (&config.raw_response_path, &analyzer) {
        (Some(raw_path), _) => {
            println!("📥 使用已保存的模型响应: {}", raw_path.display());
            let raw = std::fs::read_to_string(raw_path)
                .with_context(|| format!("Failed to read model response {}", raw_path.display()))?;
            BriefAnalysis::from_response(&brief, &raw, &Normalizer::new())
        }
        (None, Some(analyzer)) => {
            println!("🤖 正在请求模型分析简报 ({})...", config.llm.model);
            analyzer.analyze(&brief).await
        }
        (None, None) => anyhow::bail!("no model response source is available"),
    };
    let analysis = outcome.map_err(surface)?;
    timing.end_phase(TimingKeys::ANALYZE);

    let result = &analysis.result;
    let band = result.projector().score_band();
    println!(
        "✅ 分析完成，总分 {} / 100 - {}",
        result.overall_score(),
        band.message()
    );
    let low = result
        .projector()
        .low_score_categories(config.low_score_threshold);
    if !low.is_empty() {
        let titles: Vec<&str> = low.iter().map(|c| c.title()).collect();
        println!("⚠️ 需要改进的维度: {}", titles.join(", "));
    }

    let mut improved: Option<ImprovedBrief> = None;
    if config.rewrite
        && let Some(analyzer) = &analyzer
    {
        timing.start_phase(TimingKeys::REWRITE);
        println!("✍️ 正在改写简报...");
        // 改写失败不影响已完成的分析结果落盘
        match analyzer.rewrite(&brief, result).await {
            Ok(rewritten) => improved = Some(rewritten),
            Err(err) => {
                debug!(error = ?err, "brief rewrite failed");
                eprintln!("⚠️ 简报改写失败: {}", err.user_message());
            }
        }
        timing.end_phase(TimingKeys::REWRITE);
    }

    timing.start_phase(TimingKeys::OUTPUT);
    let written = outlet::save(
        config,
        &Deliverable {
            analysis: &analysis,
            improved: improved.as_ref(),
        },
    )
    .await?;
    timing.end_phase(TimingKeys::OUTPUT);

    info!(files = written.len(), "brief analysis finished");
    println!("\n{}", timing.generate_timing_report());

    Ok(())
}

// Include tests
#[cfg(test)]
mod tests;
