use super::selectors;
use crate::model::ImagesReport;
use scraper::Html;

/// Alt-text coverage. A page without images gets full credit.
pub fn analyze_images(document: &Html) -> ImagesReport {
    let mut total_images = 0;
    let mut images_with_alt = 0;

    for img in document.select(&selectors::IMAGES) {
        total_images += 1;
        if img
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.trim().is_empty())
        {
            images_with_alt += 1;
        }
    }

    let alt_ratio = if total_images > 0 {
        images_with_alt as f64 / total_images as f64
    } else {
        1.0
    };

    ImagesReport {
        total_images,
        images_with_alt,
        alt_ratio,
        score: alt_ratio * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(body: &str) -> ImagesReport {
        analyze_images(&Html::parse_document(&format!("<html><body>{}</body></html>", body)))
    }

    #[test]
    fn no_images_is_full_credit() {
        let report = images("<p>text only</p>");
        assert_eq!(report.total_images, 0);
        assert_eq!(report.alt_ratio, 1.0);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn blank_or_missing_alt_does_not_count() {
        let report = images(
            r#"<img src="a.png" alt="A cat"><img src="b.png" alt="   "><img src="c.png"><img src="d.png" alt="Dog">"#,
        );
        assert_eq!(report.total_images, 4);
        assert_eq!(report.images_with_alt, 2);
        assert_eq!(report.alt_ratio, 0.5);
        assert_eq!(report.score, 50.0);
    }
}
