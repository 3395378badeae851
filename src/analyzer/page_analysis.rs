use crate::analyzer::scoring::aggregate;
use crate::assistant::Assistant;
use crate::fetcher::PageSource;
use crate::model::{AnalysisReport, AnalysisResponse, FetchError};
use crate::parser::{
    analyze_content, analyze_headings, analyze_images, analyze_links, analyze_meta_description,
    analyze_readability, analyze_technical, analyze_title,
};

use scraper::Html;
use tracing::{debug, info};

/// Runs every extractor over one parsed document and aggregates the result.
/// Extractors only read the document and do not depend on each other.
pub fn analyze_markup(url: &str, markup: &str) -> AnalysisReport {
    let document = Html::parse_document(markup);

    let title = analyze_title(&document);
    let meta_description = analyze_meta_description(&document);
    let headings = analyze_headings(&document);
    let content = analyze_content(&document);
    let images = analyze_images(&document);
    let links = analyze_links(&document, url);
    let technical = analyze_technical(&document);
    let readability = analyze_readability(&document);

    let mut report = AnalysisReport {
        url: url.to_string(),
        title,
        meta_description,
        headings,
        content,
        images,
        links,
        technical,
        readability,
        seo_score: 0.0,
    };
    report.seo_score = aggregate(&report.category_scores());

    for (category, score) in report.category_scores() {
        debug!("{} {:?}: {:.1}", url, category, score);
    }
    report
}

pub struct PageAnalyzer<S: PageSource> {
    source: S,
}

impl<S: PageSource> PageAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch then analyze. A fetch failure aborts with no partial report.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisReport, FetchError> {
        let markup = self.source.fetch(url).await?;
        let report = analyze_markup(url, &markup);
        info!("SEO analysis of {} completed. Score: {:.1}", url, report.seo_score);
        Ok(report)
    }

    /// Like `analyze`, with suggestions attached. The assistant can never fail the analysis.
    pub async fn analyze_with(
        &self,
        url: &str,
        assistant: &Assistant,
    ) -> Result<AnalysisResponse, FetchError> {
        let report = self.analyze(url).await?;
        let ai_suggestions = assistant.suggestions_for(&report).await;
        Ok(AnalysisResponse {
            report,
            ai_suggestions: Some(ai_suggestions),
        })
    }
}
