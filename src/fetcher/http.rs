use crate::config::AppConfig;
use crate::fetcher::traits::PageSource;
use crate::model::FetchError;

use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self::with_client(client, timeout))
    }

    /// `timeout` should match the one configured on `client`; it is only used for error reporting.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.fetch_timeout_seconds),
        )
    }

    fn map_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Http(e)
        }
    }
}

/// Accepts only absolute http(s) URLs.
pub fn validate_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme `{}`", other),
        }),
    }
}

#[async_trait::async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let target = validate_url(url)?;
        info!("Fetching {}", target);

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidResponse {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.map_error(e))?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{serve_once, serve_silence, serve_stalled_body};
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;

    fn fetcher(timeout: Duration) -> HttpFetcher {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .no_proxy()
            .build()
            .unwrap();
        HttpFetcher::with_client(client, timeout)
    }

    #[test]
    fn builds_from_config() {
        assert!(HttpFetcher::from_config(&AppConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn returns_body_and_sends_browser_user_agent() {
        let (url, server) = serve_once("200 OK", "<html><title>Hi</title></html>").await;

        let body = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap();
        assert_eq!(body, "<html><title>Hi</title></html>");

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get / http/1.1"));
        assert!(request.contains(&format!("user-agent: {}", DEFAULT_USER_AGENT.to_lowercase())));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (url, _server) = serve_once("404 Not Found", "gone").await;

        let err = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse { status: 404, .. }));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let (url, _server) = serve_silence().await;

        let err = fetcher(Duration::from_millis(200)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }

    #[tokio::test]
    async fn stalled_body_times_out() {
        let (url, _server) = serve_stalled_body("200 OK", "<html><head>").await;

        let err = fetcher(Duration::from_millis(300)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }

    #[tokio::test]
    async fn rejects_relative_and_non_http_urls() {
        let f = fetcher(Duration::from_secs(1));
        assert!(matches!(
            f.fetch("/just/a/path").await,
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            f.fetch("ftp://example.com/file").await,
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
