use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;

use super::domain::PredictionRequest;

/// Parsed body of a successful `POST {endpoint}/predict` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamScore {
    pub model_used: String,
    pub prediction_score: f64,
    pub status: UpstreamStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStatus {
    Success,
    Error,
}

/// Landmark/population descriptor resolved from a postal code. Display-only;
/// the scoring path never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeLookup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PincodeDetails>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PincodeLookup {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            details: None,
            status: "error".to_string(),
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeDetails {
    pub landmark: String,
    pub pincode: String,
    pub population: String,
}

/// Failure modes of one outbound call. A single attempt ends the request;
/// there is no retry or backoff.
#[derive(Debug, thiserror::Error)]
pub enum ScoringClientError {
    #[error("scoring request exceeded the configured timeout")]
    Timeout,
    #[error("scoring service responded with status {0}")]
    UpstreamStatus(u16),
    #[error("failed to reach scoring service: {0}")]
    Transport(reqwest::Error),
    #[error("scoring service returned an unreadable body: {0}")]
    InvalidBody(reqwest::Error),
}

/// Seam between the request pipeline and the remote scoring service, so
/// tests can stand in an in-process fake.
pub trait ScoringBackend: Send + Sync {
    fn score(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = Result<UpstreamScore, ScoringClientError>> + Send;

    fn resolve_pincode(
        &self,
        pincode: &str,
    ) -> impl Future<Output = Result<PincodeLookup, ScoringClientError>> + Send;
}

/// Production backend: one bounded-timeout `reqwest` call per request.
pub struct HttpScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScoringClient {
    pub fn new(config: &ScoringConfig) -> Result<Self, ScoringClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ScoringClientError::Transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ScoringClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "dispatching scoring service call");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringClientError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(ScoringClientError::InvalidBody)
    }
}

fn classify_send_error(error: reqwest::Error) -> ScoringClientError {
    if error.is_timeout() {
        ScoringClientError::Timeout
    } else {
        ScoringClientError::Transport(error)
    }
}

impl ScoringBackend for HttpScoringClient {
    async fn score(&self, request: &PredictionRequest) -> Result<UpstreamScore, ScoringClientError> {
        self.post_json("/predict", request).await
    }

    async fn resolve_pincode(&self, pincode: &str) -> Result<PincodeLookup, ScoringClientError> {
        #[derive(Serialize)]
        struct PincodeBody<'a> {
            pincode: &'a str,
        }

        self.post_json("/pincode", &PincodeBody { pincode }).await
    }
}
