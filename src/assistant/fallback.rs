use super::{Difficulty, PriorityIssue, Suggestions};
use crate::utils::truncate_chars;

const ASSESSMENT_PREVIEW_CHARS: usize = 500;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Suggestions {
    /// Generic guidance used when the provider fails. Carries the failure in `error`.
    pub fn fallback(error_message: &str) -> Self {
        Suggestions {
            error: Some(error_message.to_string()),
            priority_issues: vec![PriorityIssue {
                issue: "AI Analysis Unavailable".into(),
                recommendation: "Please try again later or check the manual analysis above".into(),
                impact: "Use the detailed scores above to identify priority areas".into(),
                difficulty: Difficulty::Easy,
            }],
            quick_wins: strings(&[
                "Review title tag (should be 50-60 characters)",
                "Optimize meta description (150-160 characters)",
                "Add alt text to images without it",
                "Ensure proper heading hierarchy",
            ]),
            overall_assessment: format!(
                "AI analysis temporarily unavailable ({}). Please use the detailed metrics above to identify improvement areas.",
                error_message
            ),
        }
    }

    /// Guidance attached when no provider is configured at all.
    pub fn unconfigured() -> Self {
        Suggestions {
            error: None,
            priority_issues: vec![PriorityIssue {
                issue: "AI Analysis Unavailable".into(),
                recommendation: "Gemini API not configured. Please check the manual analysis above.".into(),
                impact: "Use the detailed scores to identify priority areas".into(),
                difficulty: Difficulty::Easy,
            }],
            quick_wins: strings(&[
                "Review title tag length (should be 50-60 characters)",
                "Optimize meta description (150-160 characters)",
                "Add alt text to images",
                "Check heading structure",
            ]),
            overall_assessment:
                "Manual SEO analysis completed. Configure Gemini API for AI-powered suggestions."
                    .into(),
        }
    }

    /// Used when the model answered in prose instead of JSON.
    pub fn from_plain_text(text: &str) -> Self {
        Suggestions {
            error: None,
            priority_issues: vec![PriorityIssue {
                issue: "SEO Analysis Available".into(),
                recommendation: "Review the detailed analysis above for specific recommendations".into(),
                impact: "Please check individual section scores for priority areas".into(),
                difficulty: Difficulty::Medium,
            }],
            quick_wins: strings(&[
                "Review title tag length and content",
                "Check meta description optimization",
                "Ensure all images have alt text",
                "Verify heading structure (H1, H2, H3)",
            ]),
            overall_assessment: truncate_chars(text, ASSESSMENT_PREVIEW_CHARS),
        }
    }
}
