use super::{SuggestionProvider, Suggestions};
use crate::config::GeminiConfig;
use crate::model::{AnalysisReport, SuggestionError};

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

pub struct GeminiAssistant {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiAssistant {
    pub fn new(api_key: &str, endpoint: &str, timeout: Duration) -> Result<Self, SuggestionError> {
        if api_key.trim().is_empty() {
            return Err(SuggestionError::Unavailable(
                "Gemini API key not configured".into(),
            ));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_key, endpoint, timeout))
    }

    pub fn with_client(client: Client, api_key: &str, endpoint: &str, timeout: Duration) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            endpoint: endpoint.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, SuggestionError> {
        Self::new(
            config.api_key.as_deref().unwrap_or_default(),
            &config.endpoint,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn format_prompt(report: &AnalysisReport) -> Result<String, SuggestionError> {
        let analysis = serde_json::to_string_pretty(report)?;
        Ok(format!(
            "You are an expert SEO consultant. Analyze the following website data and provide detailed, actionable SEO recommendations.\n\n\
             IMPORTANT: Respond ONLY with valid JSON in exactly this format:\n\
             {{\n\
             \x20 \"priority_issues\": [\n\
             \x20   {{\n\
             \x20     \"issue\": \"Title tag is too long\",\n\
             \x20     \"recommendation\": \"Reduce title to under 60 characters\",\n\
             \x20     \"impact\": \"High\",\n\
             \x20     \"difficulty\": \"easy\"\n\
             \x20   }}\n\
             \x20 ],\n\
             \x20 \"quick_wins\": [\n\
             \x20   \"Add missing alt text to images\",\n\
             \x20   \"Optimize meta description length\"\n\
             \x20 ],\n\
             \x20 \"overall_assessment\": \"Your website has good foundation but needs improvements in technical SEO and content optimization.\"\n\
             }}\n\n\
             Rules:\n\
             - priority_issues: Array of objects with issue, recommendation, impact, difficulty\n\
             - difficulty must be: 'easy', 'medium', or 'hard'\n\
             - impact should describe the SEO benefit\n\
             - quick_wins: Array of simple strings (actionable items)\n\
             - overall_assessment: Single paragraph summary\n\
             - Provide 3-5 priority issues and 3-5 quick wins\n\
             - Response must be valid JSON only, no other text\n\n\
             Website Analysis Data:\n\
             {}",
            analysis
        ))
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "generationConfig": {
                "temperature": 0.3,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 2048
            }
        })
    }

    fn first_candidate_text(body: &str) -> Result<String, SuggestionError> {
        let parsed: GenerateResponse = serde_json::from_str(body)
            .map_err(|e| SuggestionError::MalformedResponse(e.to_string()))?;

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            SuggestionError::MalformedResponse("no response candidates".into())
        })?;

        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| SuggestionError::MalformedResponse("candidate has no text part".into()))
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for GeminiAssistant {
    async fn suggest(&self, report: &AnalysisReport) -> Result<Suggestions, SuggestionError> {
        let prompt = Self::format_prompt(report)?;
        debug!("Sending prompt to Gemini ({} characters)", prompt.len());

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let exchange = async {
            let response = self
                .client
                .post(&url)
                .json(&Self::request_body(&prompt))
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        // The bound covers the body as well as the headers.
        let (status, body) = match timeout(self.timeout, exchange).await {
            Ok(Ok(exchange)) => exchange,
            Ok(Err(e)) if e.is_timeout() => {
                warn!("Gemini request timed out");
                return Err(SuggestionError::Timeout);
            }
            Ok(Err(e)) => {
                // The key travels in the query string; keep it out of logs.
                let e = e.without_url();
                warn!("Gemini request failed: {}", e);
                return Err(SuggestionError::Http(e));
            }
            Err(_) => {
                warn!("Gemini request timed out");
                return Err(SuggestionError::Timeout);
            }
        };

        if !status.is_success() {
            warn!("Gemini API responded [{}]: {}", status, body);
            return Err(SuggestionError::Api {
                status: status.as_u16(),
            });
        }

        let text = Self::first_candidate_text(&body)?;
        info!("Got Gemini response ({} characters)", text.len());
        Ok(Suggestions::from_model_text(&text))
    }
}
