//! Weather Prediction Dashboard - Client Core
//!
//! The stateful, renderer-agnostic half of the dashboard: favorites,
//! theme, the prediction submission lifecycle, and the HTTP calls to the
//! prediction backend. A UI layer drives it exclusively through
//! [`Dashboard::dispatch`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod external;
pub mod services;
pub mod storage;

pub use config::ClientConfig;
pub use dispatch::{Dashboard, DashboardCommand, DashboardEvent};
pub use error::{ClientError, ClientResult};
pub use external::{ApiClient, DashboardApi, HistoryQuery, HistoryResponse};
pub use services::{FavoritesStore, PredictionLifecycle, SubmissionState};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
