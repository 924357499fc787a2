//! Fact source adapter: one HTTP GET per call, one JSON field extracted.

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Fact, error::FetchError, protocol::FactResponse};
use tracing::{debug, warn};
use url::Url;

/// Where facts come from.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self) -> Result<Fact, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFactSource {
    http: Client,
    endpoint: Url,
}

impl HttpFactSource {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Performs the request and returns the full wire body. No retries and no
    /// timeout beyond whatever the underlying client imposes.
    pub async fn fetch_response(&self) -> Result<FactResponse, FetchError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        serde_json::from_slice::<FactResponse>(&body)
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    async fn fetch_fact(&self) -> Result<Fact, FetchError> {
        match self.fetch_response().await {
            Ok(body) => {
                debug!(fact = %body.fact, length = ?body.length, "fetched fact");
                Ok(body.into())
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, "fact fetch failed: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
