//! HTTP collaborators of the client core
//!
//! The prediction, history, and comparison endpoints are opaque contracts;
//! this module defines the trait the dispatch layer consumes and the
//! `reqwest`-backed implementation.

pub mod prediction;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{CityId, ComparisonEntry, HistoryRecord, HistoryStats, PredictionResult};

use crate::error::ClientResult;

pub use prediction::ApiClient;

/// Payload of `GET /history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    pub stats: HistoryStats,
    pub history: Vec<HistoryRecord>,
}

/// Query parameters accepted by `GET /history`
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// The three backend endpoints the dashboard talks to
#[async_trait]
pub trait DashboardApi {
    /// `POST /predict` with a form-encoded city name
    async fn predict(&self, city: &CityId) -> ClientResult<PredictionResult>;

    /// `GET /history`
    async fn fetch_history(&self, query: &HistoryQuery) -> ClientResult<HistoryResponse>;

    /// `GET /compare`
    async fn compare(&self) -> ClientResult<Vec<ComparisonEntry>>;
}
