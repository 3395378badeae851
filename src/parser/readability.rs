use crate::model::{ReadabilityError, ReadabilityReport};
use crate::utils::round_to;
use scraper::Html;
use tracing::debug;

/// Values reported when the text cannot be measured.
const FALLBACK_READING_EASE: f64 = 0.0;
const FALLBACK_GRADE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStatistics {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl TextStatistics {
    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.sentences as f64
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    pub fn flesch_reading_ease(&self) -> f64 {
        round_to(
            206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word(),
            2,
        )
    }

    pub fn flesch_kincaid_grade(&self) -> f64 {
        round_to(
            0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59,
            1,
        )
    }
}

/// A word is a whitespace-delimited token with at least one alphanumeric character.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-group estimate with a silent trailing "e" dropped. Never below one.
pub fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for c in letters.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if count > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        count -= 1;
    }

    count.max(1)
}

pub fn text_statistics(text: &str) -> Result<TextStatistics, ReadabilityError> {
    let word_count = words(text).count();
    if word_count == 0 {
        return Err(ReadabilityError::EmptyText);
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| words(segment).next().is_some())
        .count()
        .max(1);

    let syllables = words(text).map(count_syllables).sum();

    Ok(TextStatistics {
        words: word_count,
        sentences,
        syllables,
    })
}

/// Flesch scores over the whole document text, scripts included.
/// Unlike the content word count, `<script>` and `<style>` text is not stripped here.
pub fn analyze_readability(document: &Html) -> ReadabilityReport {
    let text: String = document.root_element().text().collect();
    readability_of(&text)
}

pub fn readability_of(text: &str) -> ReadabilityReport {
    let (flesch_reading_ease, flesch_kincaid_grade) = match text_statistics(text) {
        Ok(stats) => (stats.flesch_reading_ease(), stats.flesch_kincaid_grade()),
        Err(e) => {
            debug!("Readability fallback: {}", e);
            (FALLBACK_READING_EASE, FALLBACK_GRADE)
        }
    };

    ReadabilityReport {
        flesch_reading_ease,
        flesch_kincaid_grade,
        score: flesch_reading_ease.clamp(0.0, 100.0),
    }
}
