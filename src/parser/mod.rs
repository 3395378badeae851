// Signal extractors: each one reads the parsed document and returns its own report.

pub mod content;
pub mod headings;
pub mod images;
pub mod links;
pub mod meta_description;
pub mod readability;
pub mod technical;
pub mod title;

mod selectors;

pub use content::analyze_content;
pub use headings::analyze_headings;
pub use images::analyze_images;
pub use links::analyze_links;
pub use meta_description::analyze_meta_description;
pub use readability::analyze_readability;
pub use technical::analyze_technical;
pub use title::analyze_title;

/// Length score shared by title and meta description: full marks inside the band,
/// otherwise two points lost per character away from the target, floored at 0.
pub(crate) fn band_score(length: usize, min: usize, max: usize, target: usize) -> f64 {
    if (min..=max).contains(&length) {
        100.0
    } else {
        let distance = length.abs_diff(target) as f64;
        (100.0 - 2.0 * distance).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::band_score;

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(band_score(30, 30, 60, 50), 100.0);
        assert_eq!(band_score(60, 30, 60, 50), 100.0);
        assert_eq!(band_score(29, 30, 60, 50), 58.0);
        assert_eq!(band_score(61, 30, 60, 50), 78.0);
    }
}
