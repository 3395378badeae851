use super::{band_score, selectors};
use crate::model::MetaDescriptionReport;
use scraper::Html;

const MIN_LENGTH: usize = 120;
const MAX_LENGTH: usize = 160;
const TARGET_LENGTH: usize = 140;

pub fn analyze_meta_description(document: &Html) -> MetaDescriptionReport {
    let text = document
        .select(&selectors::META_DESCRIPTION)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default();

    let length = text.chars().count();

    MetaDescriptionReport {
        optimal_length: (MIN_LENGTH..=MAX_LENGTH).contains(&length),
        score: band_score(length, MIN_LENGTH, MAX_LENGTH, TARGET_LENGTH),
        text,
        length,
    }
}
