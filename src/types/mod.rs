pub mod analysis;
pub mod category;

pub use analysis::{AnalysisResult, CategoryResult, ExtractedFields};
pub use category::{Category, ExtractedField};
