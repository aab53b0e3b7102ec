//! HTTP client for a Rasa-compatible classifier

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{
    error::IntentError,
    types::{ParseRequest, ParseResponse},
    IntentClassifier,
};

/// Connection settings for the classifier service
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Full URL of the parse endpoint
    pub endpoint: String,
    /// Overall timeout for a single attempt
    pub timeout: Duration,
    /// Extra attempts after a connection failure (0 = single attempt)
    pub max_retries: u32,
}

impl ClassifierConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:5005/model/parse";

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the per-attempt timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries on connection failure
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 0,
        }
    }
}

/// Client for the classifier's parse endpoint
#[derive(Debug, Clone)]
pub struct RasaClient {
    http_client: Client,
    config: ClassifierConfig,
}

impl RasaClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ClassifierConfig) -> Result<Self, IntentError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5).min(config.timeout))
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                IntentError::Unavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// One request/response exchange with the classifier
    async fn parse_once(&self, text: &str) -> Result<String, IntentError> {
        let request = ParseRequest {
            text: text.to_string(),
        };

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let parsed: ParseResponse = serde_json::from_slice(&body)?;
        Ok(parsed.intent.name().to_string())
    }
}

#[async_trait]
impl IntentClassifier for RasaClient {
    async fn classify(&self, text: &str) -> Result<String, IntentError> {
        let mut attempt = 0;
        loop {
            match self.parse_once(text).await {
                Ok(intent) => {
                    tracing::debug!(%intent, attempt, "classifier answered");
                    return Ok(intent);
                }
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(error = %e, attempt, "classifier unreachable, retrying");
                }
                Err(e) => {
                    tracing::error!(error = %e, endpoint = %self.config.endpoint, "classifier call failed");
                    return Err(e);
                }
            }
        }
    }
}
