//! REST client for the Document Intelligence layout analysis API.
//!
//! Layout analysis is a long-running operation: a submit call answers
//! `202 Accepted` with an `Operation-Location` header, and the result is
//! fetched by polling that URL until the operation reports a terminal
//! state.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::azure::result::{AnalyzeOutcome, AnalyzeResult, OperationState, OperationStatus};
use crate::core::errors::{AnalysisError, AnalysisResult};

/// API version the client pins its requests to.
const API_VERSION: &str = "2023-07-31";
/// Credential header expected by the service.
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
/// Response header carrying the polling URL after a successful submit.
const OPERATION_LOCATION: &str = "operation-location";

const DEFAULT_MODEL_ID: &str = "prebuilt-layout";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(120);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Handle for a submitted analysis that has not completed yet.
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    /// Absolute URL to poll for completion.
    pub operation_url: String,
}

/// Client for one configured Document Intelligence endpoint.
///
/// Holds no mutable state; construct it once at startup and share it
/// behind an `Arc` across concurrent requests.
#[derive(Debug, Clone)]
pub struct AzureClient {
    http: reqwest::Client,
    endpoint: String,
    key: String,
    model_id: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl AzureClient {
    /// Creates a client for the given service endpoint and access key.
    ///
    /// The layout model defaults to `prebuilt-layout`; polling defaults to
    /// a 2s interval bounded at 120s overall. A trailing slash on the
    /// endpoint is accepted and stripped.
    pub fn new(endpoint: impl Into<String>, key: impl Into<String>) -> AnalysisResult<Self> {
        let endpoint = endpoint.into();
        let key = key.into();
        if endpoint.trim().is_empty() {
            return Err(AnalysisError::config("service endpoint must not be empty"));
        }
        if key.trim().is_empty() {
            return Err(AnalysisError::config("service key must not be empty"));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AnalysisError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key,
            model_id: DEFAULT_MODEL_ID.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        })
    }

    /// Sets the layout model to request.
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the delay between completion polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the overall bound on waiting for completion.
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// Submits a document and waits for the completed analysis.
    pub async fn analyze(&self, document: &[u8]) -> AnalysisResult<AnalyzeOutcome> {
        let pending = self.submit(document).await?;
        self.wait_for_completion(&pending).await
    }

    /// Submits document bytes for layout analysis.
    ///
    /// A `202` with an `Operation-Location` header yields the pending
    /// handle; any other status is a rejection carrying the response body.
    pub async fn submit(&self, document: &[u8]) -> AnalysisResult<PendingAnalysis> {
        let url = self.analyze_url();
        debug!(url = %url, bytes = document.len(), "submitting document for analysis");

        let response = self
            .http
            .post(&url)
            .header(KEY_HEADER, &self.key)
            .header(reqwest::header::CONTENT_TYPE, "application/pdf")
            .body(document.to_vec())
            .send()
            .await
            .map_err(|e| AnalysisError::request("analysis submit", e))?;

        let status = response.status();
        if status != reqwest::StatusCode::ACCEPTED {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let operation_url = response
            .headers()
            .get(OPERATION_LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                AnalysisError::malformed("submit accepted without an Operation-Location header")
            })?;

        debug!(operation_url = %operation_url, "analysis accepted");
        Ok(PendingAnalysis { operation_url })
    }

    /// Polls a pending operation until it reaches a terminal state.
    ///
    /// `succeeded` yields the decoded result together with the raw
    /// payload; `failed` surfaces the service-reported error. Pending
    /// states (including states this client does not recognize) poll
    /// again after the configured interval until the overall timeout
    /// elapses.
    pub async fn wait_for_completion(
        &self,
        pending: &PendingAnalysis,
    ) -> AnalysisResult<AnalyzeOutcome> {
        let deadline = Instant::now() + self.poll_timeout;
        loop {
            tokio::time::sleep(self.poll_interval).await;

            let response = self
                .http
                .get(&pending.operation_url)
                .header(KEY_HEADER, &self.key)
                .send()
                .await
                .map_err(|e| AnalysisError::request("analysis status poll", e))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AnalysisError::Rejected {
                    status: status.as_u16(),
                    body,
                });
            }

            let operation: OperationStatus = response
                .json()
                .await
                .map_err(|e| AnalysisError::request("analysis status decode", e))?;

            match operation.status {
                OperationState::Succeeded => {
                    let raw = operation.analyze_result.ok_or_else(|| {
                        AnalysisError::malformed("operation succeeded without a result payload")
                    })?;
                    let result: AnalyzeResult = serde_json::from_value(raw.clone())
                        .map_err(|e| {
                            AnalysisError::malformed(format!("unexpected analyzeResult shape: {e}"))
                        })?;
                    return Ok(AnalyzeOutcome { result, raw });
                }
                OperationState::Failed => {
                    let message = operation
                        .error
                        .map(|error| error.to_string())
                        .unwrap_or_else(|| "operation failed without detail".to_string());
                    return Err(AnalysisError::Failed { message });
                }
                state => {
                    debug!(status = state.as_str(), "analysis still pending");
                    if Instant::now() >= deadline {
                        return Err(AnalysisError::Timeout {
                            timeout_secs: self.poll_timeout.as_secs(),
                        });
                    }
                }
            }
        }
    }

    /// URL of the analyze operation for the configured model.
    fn analyze_url(&self) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint, self.model_id, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_url_targets_the_configured_model() {
        let client = AzureClient::new("https://myresource.cognitiveservices.azure.com", "key")
            .unwrap()
            .with_model_id("prebuilt-layout");

        assert_eq!(
            client.analyze_url(),
            "https://myresource.cognitiveservices.azure.com/formrecognizer/documentModels/prebuilt-layout:analyze?api-version=2023-07-31"
        );
    }

    #[test]
    fn trailing_endpoint_slash_is_stripped() {
        let client =
            AzureClient::new("https://myresource.cognitiveservices.azure.com/", "key").unwrap();
        assert!(!client.analyze_url().contains("com//"));
    }

    #[test]
    fn empty_endpoint_or_key_is_rejected() {
        assert!(matches!(
            AzureClient::new("", "key"),
            Err(AnalysisError::Config { .. })
        ));
        assert!(matches!(
            AzureClient::new("https://myresource.cognitiveservices.azure.com", "  "),
            Err(AnalysisError::Config { .. })
        ));
    }

    #[test]
    fn builder_methods_override_the_defaults() {
        let client = AzureClient::new("https://myresource.cognitiveservices.azure.com", "key")
            .unwrap()
            .with_model_id("custom-bizfile")
            .with_poll_interval(Duration::from_secs(1))
            .with_poll_timeout(Duration::from_secs(30));

        assert_eq!(client.model_id, "custom-bizfile");
        assert_eq!(client.poll_interval, Duration::from_secs(1));
        assert_eq!(client.poll_timeout, Duration::from_secs(30));
    }
}
