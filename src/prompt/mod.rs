//! 提示词构建

mod analysis;
mod rewrite;

pub use analysis::{ANALYSIS_SYSTEM_PROMPT, build_analysis_prompt};
pub use rewrite::{FromTo, REWRITE_SYSTEM_PROMPT, RewritePlan};
