pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod llm;
pub mod normalizer;
pub mod outlet;
pub mod projector;
pub mod prompt;
pub mod sentiment;
pub mod source;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use analyzer::{BriefAnalysis, BriefAnalyzer, ImprovedBrief};
pub use config::Config;
pub use error::AnalysisError;
pub use normalizer::{Normalizer, normalize};
pub use types::{AnalysisResult, Category};
pub use workflow::launch;
