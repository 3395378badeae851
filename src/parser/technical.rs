use super::selectors;
use crate::model::TechnicalReport;
use scraper::Html;

/// Presence checks only; any `charset` attribute counts, even an empty one.
pub fn analyze_technical(document: &Html) -> TechnicalReport {
    let meta_viewport = document.select(&selectors::META_VIEWPORT).next().is_some();
    let meta_charset = document.select(&selectors::META_CHARSET).next().is_some();

    TechnicalReport {
        meta_viewport,
        meta_charset,
        score: (u8::from(meta_viewport) + u8::from(meta_charset)) as f64 * 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical(head: &str) -> TechnicalReport {
        analyze_technical(&Html::parse_document(&format!(
            "<html><head>{}</head><body></body></html>",
            head
        )))
    }

    #[test]
    fn both_markers_score_full() {
        let report = technical(
            r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width">"#,
        );
        assert!(report.meta_viewport);
        assert!(report.meta_charset);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn each_marker_is_worth_half() {
        assert_eq!(technical(r#"<meta charset="">"#).score, 50.0);
        assert_eq!(technical(r#"<meta name="viewport" content="x">"#).score, 50.0);
        assert_eq!(technical("").score, 0.0);
    }
}
