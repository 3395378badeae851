use crate::model::ContentReport;
use scraper::Html;

const ADEQUATE_WORD_COUNT: usize = 300;

/// Document text with `<script>` and `<style>` subtrees left out.
/// Text nodes are concatenated as-is, without inserted separators.
pub(crate) fn visible_text(document: &Html) -> String {
    let mut text = String::new();
    for node in document.root_element().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }
    text
}

pub(crate) fn content_score(word_count: usize) -> f64 {
    if word_count < ADEQUATE_WORD_COUNT {
        (word_count as f64 / 3.0).min(100.0)
    } else {
        100.0
    }
}

pub fn analyze_content(document: &Html) -> ContentReport {
    let word_count = visible_text(document).split_whitespace().count();

    ContentReport {
        word_count,
        adequate_length: word_count >= ADEQUATE_WORD_COUNT,
        score: content_score(word_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn score_ramps_linearly_below_threshold() {
        assert_eq!(content_score(0), 0.0);
        assert_eq!(content_score(150), 50.0);
        assert_eq!(content_score(299), 299.0 / 3.0);
        assert_eq!(content_score(300), 100.0);
        assert_eq!(content_score(5000), 100.0);
    }

    #[test]
    fn scripts_and_styles_are_not_counted() {
        let html = format!(
            "<html><head><style>body {{ color: red; }}</style></head><body><p>{}</p><script>var a = 1; var b = 2;</script></body></html>",
            words(150)
        );
        let report = analyze_content(&Html::parse_document(&html));
        assert_eq!(report.word_count, 150);
        assert!(!report.adequate_length);
        assert_eq!(report.score, 50.0);
    }

    #[test]
    fn long_page_is_adequate() {
        let html = format!("<html><body><p>{}</p></body></html>", words(400));
        let report = analyze_content(&Html::parse_document(&html));
        assert_eq!(report.word_count, 400);
        assert!(report.adequate_length);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn visible_text_keeps_nested_inline_text() {
        let doc = Html::parse_document("<html><body><p>one <b>two</b> three</p></body></html>");
        assert_eq!(visible_text(&doc).split_whitespace().count(), 3);
    }
}
