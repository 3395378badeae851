use super::selectors;
use crate::model::LinksReport;
use reqwest::Url;
use scraper::Html;

const POINTS_PER_LINK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Internal,
    External,
    /// mailto:, javascript:, fragments, bare relative paths. Counted in the total only.
    Unclassified,
}

/// Host plus explicit port, the part compared to decide internal vs external.
fn authority(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

pub fn classify_link(href: &str, page_authority: Option<&str>) -> LinkKind {
    if href.starts_with("http") {
        if authority(href).as_deref() == page_authority {
            LinkKind::Internal
        } else {
            LinkKind::External
        }
    } else if href.starts_with('/') {
        LinkKind::Internal
    } else {
        LinkKind::Unclassified
    }
}

pub fn analyze_links(document: &Html, page_url: &str) -> LinksReport {
    let page_authority = authority(page_url);

    let mut total_links = 0;
    let mut internal_links = 0;
    let mut external_links = 0;

    for anchor in document.select(&selectors::LINKS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        total_links += 1;
        match classify_link(href, page_authority.as_deref()) {
            LinkKind::Internal => internal_links += 1,
            LinkKind::External => external_links += 1,
            LinkKind::Unclassified => {}
        }
    }

    LinksReport {
        total_links,
        internal_links,
        external_links,
        score: ((internal_links + external_links) * POINTS_PER_LINK).min(100) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/blog/post";

    fn links(body: &str) -> LinksReport {
        analyze_links(
            &Html::parse_document(&format!("<html><body>{}</body></html>", body)),
            PAGE,
        )
    }

    #[test]
    fn classifies_by_domain_and_root_relative_path() {
        let page = Some("example.com");
        assert_eq!(classify_link("https://example.com/about", page), LinkKind::Internal);
        assert_eq!(classify_link("http://example.com", page), LinkKind::Internal);
        assert_eq!(classify_link("/contact", page), LinkKind::Internal);
        assert_eq!(classify_link("https://other.org/x", page), LinkKind::External);
        assert_eq!(classify_link("https://www.example.com/", page), LinkKind::External);
    }

    #[test]
    fn non_http_forms_are_left_unclassified() {
        let page = Some("example.com");
        assert_eq!(classify_link("mailto:hi@example.com", page), LinkKind::Unclassified);
        assert_eq!(classify_link("#top", page), LinkKind::Unclassified);
        assert_eq!(classify_link("javascript:void(0)", page), LinkKind::Unclassified);
        assert_eq!(classify_link("relative/page", page), LinkKind::Unclassified);
    }

    #[test]
    fn total_counts_every_anchor_with_href() {
        let report = links(
            r##"<a href="/a">a</a>
               <a href="https://example.com/b">b</a>
               <a href="https://other.org">c</a>
               <a href="mailto:x@y.z">d</a>
               <a href="#frag">e</a>
               <a name="no-href">f</a>"##,
        );
        assert_eq!(report.total_links, 5);
        assert_eq!(report.internal_links, 2);
        assert_eq!(report.external_links, 1);
        assert_eq!(report.score, 30.0);
    }

    #[test]
    fn score_caps_at_one_hundred() {
        let body: String = (0..15).map(|i| format!(r#"<a href="/p{}">p</a>"#, i)).collect();
        let report = links(&body);
        assert_eq!(report.internal_links, 15);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn explicit_port_is_part_of_the_domain() {
        assert_eq!(authority("http://localhost:8080/x").as_deref(), Some("localhost:8080"));
        assert_eq!(
            classify_link("http://localhost:9090/", Some("localhost:8080")),
            LinkKind::External
        );
    }
}
