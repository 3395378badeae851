use crate::model::Category;
use crate::utils::round_to;

/// Fixed contribution of each signal to the overall score. Sums to 1.0.
pub const WEIGHTS: [(Category, f64); 8] = [
    (Category::Title, 0.20),
    (Category::MetaDescription, 0.15),
    (Category::Headings, 0.15),
    (Category::Content, 0.15),
    (Category::Images, 0.10),
    (Category::Links, 0.10),
    (Category::Technical, 0.10),
    (Category::Readability, 0.05),
];

pub fn weight_of(category: Category) -> f64 {
    WEIGHTS
        .iter()
        .find(|(c, _)| *c == category)
        .map_or(0.0, |(_, w)| *w)
}

/// Weighted sum rounded to one decimal, ties to even. Categories missing from
/// `scores` are skipped; a repeated category counts once.
pub fn aggregate(scores: &[(Category, f64)]) -> f64 {
    let mut total = 0.0;
    for (i, (category, score)) in scores.iter().enumerate() {
        if scores[..i].iter().any(|(c, _)| c == category) {
            continue;
        }
        total += score * weight_of(*category);
    }
    round_to(total, 1)
}
