use crate::model::FetchError;

/// Source of raw page markup. Single attempt, no retries.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
