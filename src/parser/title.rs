use super::{band_score, selectors};
use crate::model::TitleReport;
use scraper::Html;

const MIN_LENGTH: usize = 30;
const MAX_LENGTH: usize = 60;
const TARGET_LENGTH: usize = 50;

/// Reads the first `<title>`; a missing title is an empty one.
pub fn analyze_title(document: &Html) -> TitleReport {
    let text = document
        .select(&selectors::TITLE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let length = text.chars().count();

    TitleReport {
        optimal_length: (MIN_LENGTH..=MAX_LENGTH).contains(&length),
        score: band_score(length, MIN_LENGTH, MAX_LENGTH, TARGET_LENGTH),
        text,
        length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_title(title: &str) -> Html {
        Html::parse_document(&format!("<html><head><title>{}</title></head><body></body></html>", title))
    }

    #[test]
    fn title_inside_band_scores_full() {
        let report = analyze_title(&page_with_title(&"a".repeat(45)));
        assert_eq!(report.length, 45);
        assert!(report.optimal_length);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn title_outside_band_loses_two_points_per_char() {
        let short = analyze_title(&page_with_title(&"a".repeat(20)));
        assert!(!short.optimal_length);
        assert_eq!(short.score, 40.0);

        let long = analyze_title(&page_with_title(&"a".repeat(100)));
        assert_eq!(long.score, 0.0);

        let slightly_long = analyze_title(&page_with_title(&"a".repeat(65)));
        assert_eq!(slightly_long.score, 70.0);
    }

    #[test]
    fn title_is_trimmed_and_counted_in_chars() {
        let report = analyze_title(&page_with_title("  Café  "));
        assert_eq!(report.text, "Café");
        assert_eq!(report.length, 4);
    }

    #[test]
    fn missing_title_degrades_to_empty() {
        let report = analyze_title(&Html::parse_document("<html><body><p>hi</p></body></html>"));
        assert_eq!(report.text, "");
        assert_eq!(report.length, 0);
        assert_eq!(report.score, 0.0);
    }
}
