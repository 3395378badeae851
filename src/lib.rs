pub mod analyzer;
pub mod assistant;
pub mod config;
pub mod fetcher;
pub mod model;
pub mod parser;
pub mod storage;
pub mod utils;

pub use analyzer::{analyze_markup, PageAnalyzer};
pub use assistant::{Assistant, Suggestions};
pub use fetcher::{HttpFetcher, PageSource};
pub use model::{AnalysisReport, AnalysisResponse, FetchError};
