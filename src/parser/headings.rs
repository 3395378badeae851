use super::selectors;
use crate::model::HeadingsReport;
use scraper::Html;
use std::collections::BTreeMap;

const LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Groups heading texts by level. Proper structure means exactly one h1 and at least one h2.
pub fn analyze_headings(document: &Html) -> HeadingsReport {
    let mut structure: BTreeMap<String, Vec<String>> = LEVELS
        .iter()
        .map(|level| (level.to_string(), Vec::new()))
        .collect();

    for el in document.select(&selectors::HEADINGS) {
        let text = el.text().collect::<String>().trim().to_string();
        structure
            .entry(el.value().name().to_string())
            .or_default()
            .push(text);
    }

    let h1_count = structure.get("h1").map_or(0, Vec::len);
    let has_h2 = structure.get("h2").is_some_and(|h2| !h2.is_empty());
    let proper_structure = h1_count == 1 && has_h2;

    HeadingsReport {
        structure,
        h1_count,
        proper_structure,
        score: if proper_structure { 100.0 } else { 50.0 },
    }
}
