// AI-suggestion collaborator: the contract, the Gemini client and the local fallbacks.

pub mod fallback;
pub mod gemini;
pub mod response;

pub use gemini::GeminiAssistant;

use crate::config::GeminiConfig;
use crate::model::{AnalysisReport, SuggestionError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive; anything unrecognized reads as `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityIssue {
    pub issue: String,
    pub recommendation: String,
    pub impact: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub priority_issues: Vec<PriorityIssue>,
    pub quick_wins: Vec<String>,
    pub overall_assessment: String,
}

#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, report: &AnalysisReport) -> Result<Suggestions, SuggestionError>;
}

/// Suggestion collaborator handed to the analysis. `Unavailable` is a normal state,
/// not a failure: the analysis still completes with generic guidance.
pub enum Assistant {
    Available(Box<dyn SuggestionProvider>),
    Unavailable { reason: String },
}

impl Assistant {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Assistant::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        match GeminiAssistant::from_config(config) {
            Ok(gemini) => Assistant::Available(Box::new(gemini)),
            Err(e) => Assistant::unavailable(e.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Assistant::Available(_))
    }

    /// Never fails: provider errors and absence both map to a fallback payload.
    pub async fn suggestions_for(&self, report: &AnalysisReport) -> Suggestions {
        match self {
            Assistant::Available(provider) => match provider.suggest(report).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    warn!("Suggestion provider failed for {}: {}", report.url, e);
                    Suggestions::fallback(&e.to_string())
                }
            },
            Assistant::Unavailable { reason } => {
                debug!("Assistant unavailable ({}), using generic guidance", reason);
                Suggestions::unconfigured()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_markup;

    struct Failing;

    #[async_trait::async_trait]
    impl SuggestionProvider for Failing {
        async fn suggest(&self, _report: &AnalysisReport) -> Result<Suggestions, SuggestionError> {
            Err(SuggestionError::Api { status: 503 })
        }
    }

    struct Canned(Suggestions);

    #[async_trait::async_trait]
    impl SuggestionProvider for Canned {
        async fn suggest(&self, _report: &AnalysisReport) -> Result<Suggestions, SuggestionError> {
            Ok(self.0.clone())
        }
    }

    fn report() -> AnalysisReport {
        analyze_markup("https://example.com", "<html><head><title>t</title></head></html>")
    }

    #[test]
    fn difficulty_parsing_is_lenient() {
        assert_eq!(Difficulty::parse_lenient("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::parse_lenient("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient("trivial"), Difficulty::Medium);
    }

    #[test]
    fn missing_key_means_unavailable() {
        let assistant = Assistant::from_config(&GeminiConfig::default());
        assert!(!assistant.is_available());
    }

    #[tokio::test]
    async fn provider_failure_becomes_fallback() {
        let assistant = Assistant::Available(Box::new(Failing));
        let suggestions = assistant.suggestions_for(&report()).await;
        assert_eq!(suggestions.error.as_deref(), Some("api error (status: 503)"));
        assert_eq!(suggestions.priority_issues.len(), 1);
        assert_eq!(suggestions.priority_issues[0].difficulty, Difficulty::Easy);
        assert_eq!(suggestions.quick_wins.len(), 4);
        assert!(suggestions.overall_assessment.contains("api error (status: 503)"));
    }

    #[tokio::test]
    async fn unavailable_assistant_uses_generic_guidance() {
        let suggestions = Assistant::unavailable("no key")
            .suggestions_for(&report())
            .await;
        assert_eq!(suggestions, Suggestions::unconfigured());
        assert!(suggestions.error.is_none());
    }

    #[tokio::test]
    async fn provider_result_is_passed_through() {
        let canned = Suggestions {
            error: None,
            priority_issues: vec![],
            quick_wins: vec!["Shorten the title".into()],
            overall_assessment: "Fine.".into(),
        };
        let assistant = Assistant::Available(Box::new(Canned(canned.clone())));
        assert_eq!(assistant.suggestions_for(&report()).await, canned);
    }

    #[test]
    fn suggestions_serialize_in_the_documented_shape() {
        let value = serde_json::to_value(Suggestions::unconfigured()).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["priority_issues"][0]["difficulty"], "easy");
        assert!(value["quick_wins"].is_array());
        assert!(value["overall_assessment"].is_string());
    }
}
