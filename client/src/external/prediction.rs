//! `reqwest`-backed client for the prediction backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{CityId, ComparisonEntry, PredictionResult};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, GENERIC_ERROR_MESSAGE};

use super::{DashboardApi, HistoryQuery, HistoryResponse};

/// HTTP client for the `/predict`, `/history`, and `/compare` endpoints
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Error body of a non-success response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Extract the server-supplied error message, falling back to the
    /// generic text when the body carries none.
    async fn error_message(response: reqwest::Response) -> String {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn predict(&self, city: &CityId) -> ClientResult<PredictionResult> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(%city, "submitting prediction request");

        let response = self
            .client
            .post(&url)
            .form(&[("city", city.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = Self::error_message(response).await;
            tracing::debug!(%status, %message, "prediction request rejected");
            return Err(ClientError::Server(message));
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(|e| ClientError::Network(format!("failed to parse prediction: {}", e)))
    }

    async fn fetch_history(&self, query: &HistoryQuery) -> ClientResult<HistoryResponse> {
        let url = format!("{}/history", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Server(Self::error_message(response).await));
        }

        response
            .json::<HistoryResponse>()
            .await
            .map_err(|e| ClientError::Network(format!("failed to parse history: {}", e)))
    }

    async fn compare(&self) -> ClientResult<Vec<ComparisonEntry>> {
        let url = format!("{}/compare", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Server(Self::error_message(response).await));
        }

        response
            .json::<Vec<ComparisonEntry>>()
            .await
            .map_err(|e| ClientError::Network(format!("failed to parse comparison: {}", e)))
    }
}
