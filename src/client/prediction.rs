use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::ClassifiedError;
use crate::models::{CheckResult, HealthStatus};

/// Boundary trait for classification, so the session controller can be
/// exercised without a live service.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn predict(&self, text: &str) -> Result<CheckResult, ClassifiedError>;
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

/// Optional error body shape: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the remote AFF detector API.
///
/// Issues exactly one request per call; interprets the outcome into a
/// [`ClassifiedError`] per the module-level strategy. No timeout is imposed
/// here — the transport's own failure signaling is authoritative.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url: normalize_base_url(base_url.into()) })
    }

    /// Client pointing at the endpoint configured in the environment
    /// (`AFF_API_URL`, default `http://localhost:8000`).
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(crate::utils::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lightweight liveness probe (`GET /health`).
    ///
    /// Not part of the prediction path; non-2xx responses fail without any
    /// detail extraction.
    pub async fn check_health(&self) -> Result<HealthStatus, ClassifiedError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<HealthStatus>().await.map_err(|e| {
                tracing::warn!(error = %e, "health response body did not decode");
                ClassifiedError::Unknown
            });
        }
        if status.is_server_error() {
            return Err(ClassifiedError::ServerFailure { status: status.as_u16() });
        }
        Err(ClassifiedError::ClientRequest {
            status: status.as_u16(),
            message: "Health check failed".to_string(),
        })
    }
}

#[async_trait]
impl Classifier for PredictionClient {
    /// Classify one piece of text (`POST /predict`).
    ///
    /// The caller guarantees `text` is non-empty after trimming; no further
    /// validation happens here, and `confidence` bounds are the service's
    /// contract to keep.
    async fn predict(&self, text: &str) -> Result<CheckResult, ClassifiedError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(url = %url, chars = text.len(), "dispatching predict request");

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return response.json::<CheckResult>().await.map_err(|e| {
                tracing::warn!(error = %e, "predict response body did not decode");
                ClassifiedError::Unknown
            });
        }

        let code = status.as_u16();
        // Body is consumed here either way; a missing/unparsable detail falls
        // back to a generic message carrying the status.
        let detail = response.json::<ErrorBody>().await.ok().map(|b| b.detail);

        if status.is_client_error() {
            return Err(ClassifiedError::ClientRequest {
                status: code,
                message: detail
                    .unwrap_or_else(|| format!("Request failed with status {code}")),
            });
        }
        if status.is_server_error() {
            return Err(ClassifiedError::ServerFailure { status: code });
        }
        tracing::warn!(status = code, "unexpected non-success status from predict");
        Err(ClassifiedError::Unknown)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Map a reqwest failure that produced no HTTP response.
///
/// Connect-level failures (refused connection, DNS) and timeouts mean the
/// service as a whole is unreachable; anything else is an unexpected
/// transport condition.
fn classify_transport_error(e: reqwest::Error) -> ClassifiedError {
    if e.is_connect() || e.is_timeout() {
        tracing::warn!(error = %e, "prediction service unreachable");
        return ClassifiedError::NetworkUnreachable;
    }
    tracing::warn!(error = %e, "unclassified transport failure");
    ClassifiedError::Unknown
}
