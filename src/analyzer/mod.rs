// Analyzer module: page orchestration and the weighted score.

pub mod page_analysis;
pub mod scoring;

// Re-export the main analyzer for ease of use.
pub use page_analysis::{analyze_markup, PageAnalyzer};
pub use scoring::aggregate;
