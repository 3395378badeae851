// Core structs: AnalysisReport and the per-signal reports, plus error types
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

use crate::assistant::Suggestions;

/// Every signal report carries a score in [0, 100] computed from its own attributes only.
pub trait SignalScore {
    fn score(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleReport {
    pub text: String,
    pub length: usize,
    pub optimal_length: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaDescriptionReport {
    pub text: String,
    pub length: usize,
    pub optimal_length: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingsReport {
    /// Heading texts keyed by level ("h1".."h6"), document order kept per level.
    pub structure: BTreeMap<String, Vec<String>>,
    pub h1_count: usize,
    pub proper_structure: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    pub word_count: usize,
    pub adequate_length: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesReport {
    pub total_images: usize,
    pub images_with_alt: usize,
    pub alt_ratio: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinksReport {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    pub meta_viewport: bool,
    pub meta_charset: bool,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub score: f64,
}

macro_rules! impl_signal_score {
    ($($report:ty),* $(,)?) => {
        $(impl SignalScore for $report {
            fn score(&self) -> f64 {
                self.score
            }
        })*
    };
}

impl_signal_score!(
    TitleReport,
    MetaDescriptionReport,
    HeadingsReport,
    ContentReport,
    ImagesReport,
    LinksReport,
    TechnicalReport,
    ReadabilityReport,
);

/// Signal categories that feed the weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Title,
    MetaDescription,
    Headings,
    Content,
    Images,
    Links,
    Technical,
    Readability,
}

/// Result of analyzing a single page. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub title: TitleReport,
    pub meta_description: MetaDescriptionReport,
    pub headings: HeadingsReport,
    pub content: ContentReport,
    pub images: ImagesReport,
    pub links: LinksReport,
    pub technical: TechnicalReport,
    pub readability: ReadabilityReport,
    pub seo_score: f64,
}

impl AnalysisReport {
    /// Sub-score per category, in weight-table order.
    pub fn category_scores(&self) -> Vec<(Category, f64)> {
        vec![
            (Category::Title, self.title.score()),
            (Category::MetaDescription, self.meta_description.score()),
            (Category::Headings, self.headings.score()),
            (Category::Content, self.content.score()),
            (Category::Images, self.images.score()),
            (Category::Links, self.links.score()),
            (Category::Technical, self.technical.score()),
            (Category::Readability, self.readability.score()),
        ]
    }
}

/// A report together with the optional AI suggestions attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggestions: Option<Suggestions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub url: String,
    pub seo_score: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    InvalidResponse { url: String, status: u16 },
}

#[derive(Debug, Error, PartialEq)]
pub enum ReadabilityError {
    #[error("no words to measure")]
    EmptyText,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("suggestion provider unavailable: {0}")]
    Unavailable(String),
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error (status: {status})")]
    Api { status: u16 },
    #[error("request timeout")]
    Timeout,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("cannot encode analysis: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("analysis not found")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
