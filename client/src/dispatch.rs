//! Command/event surface of the client core
//!
//! The renderer never reaches into individual services: it sends
//! `DashboardCommand`s and renders the `DashboardEvent`s that come back.
//! This keeps the DOM layer free of decision logic and the core free of
//! element ids.

use shared::{
    aggregate_stats, evaluate_alerts, resolve_city, Alert, CityId, CitySelection,
    ComparisonEntry, HistoryRecord, HistoryStats, PredictionResult, Theme,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::external::{ApiClient, DashboardApi, HistoryQuery};
use crate::services::history::export_history;
use crate::services::theme::{load_theme, save_theme};
use crate::services::{FavoritesStore, PredictionLifecycle};
use crate::storage::KeyValueStore;

/// User intents the renderer can express
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Submit the prediction form
    SubmitPrediction { selection: CitySelection },
    /// Re-run a prediction for a city picked from the favorites sidebar
    SelectFavorite { city: String },
    /// Star or un-star a city
    ToggleFavorite { city: String },
    /// Open the history view
    OpenHistory,
    /// Download the history as CSV
    ExportHistory,
    /// Open the per-city accuracy comparison
    CompareCities,
    /// Switch between light and dark themes
    ToggleTheme,
}

/// Facts the renderer displays
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    PredictionReady {
        result: PredictionResult,
        alerts: Vec<Alert>,
        is_favorite: bool,
    },
    PredictionFailed {
        message: String,
    },
    FavoritesChanged {
        city: CityId,
        is_favorite: bool,
        favorites: Vec<String>,
    },
    HistoryLoaded {
        stats: HistoryStats,
        records: Vec<HistoryRecord>,
    },
    ExportReady {
        file_name: &'static str,
        contents: String,
    },
    ComparisonLoaded {
        entries: Vec<ComparisonEntry>,
    },
    ThemeChanged {
        theme: Theme,
    },
}

/// The dashboard core: owned state plus the collaborators it drives
pub struct Dashboard<S: KeyValueStore, A: DashboardApi> {
    store: S,
    api: A,
    favorites: FavoritesStore,
    lifecycle: PredictionLifecycle,
    theme: Theme,
}

impl<S: KeyValueStore> Dashboard<S, ApiClient> {
    /// Build a dashboard against the configured backend.
    pub fn new(store: S, config: &ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(config)?;
        Ok(Self::with_api(store, api))
    }
}

impl<S: KeyValueStore, A: DashboardApi> Dashboard<S, A> {
    /// Build a dashboard with an explicit API implementation.
    pub fn with_api(store: S, api: A) -> Self {
        let favorites = FavoritesStore::load(&store);
        let theme = load_theme(&store);
        Self {
            store,
            api,
            favorites,
            lifecycle: PredictionLifecycle::new(),
            theme,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_submitting(&self) -> bool {
        self.lifecycle.is_submitting()
    }

    /// Tear the dashboard down, handing back its backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Handle one command, returning the events the renderer should apply.
    ///
    /// An ignored command (re-entrant submission, toggling an invalid city)
    /// yields no events; a failed prediction attempt is itself an event, not
    /// an error, because the lifecycle owns that outcome.
    pub async fn dispatch(&mut self, command: DashboardCommand) -> ClientResult<Vec<DashboardEvent>> {
        match command {
            DashboardCommand::SubmitPrediction { selection } => {
                let city = resolve_city(&selection)
                    .map_err(|msg| ClientError::Validation(msg.to_string()))?;
                self.submit(city).await
            }
            DashboardCommand::SelectFavorite { city } => {
                let city = CityId::new(&city)
                    .ok_or_else(|| ClientError::Validation("City is required".to_string()))?;
                self.submit(city).await
            }
            DashboardCommand::ToggleFavorite { city } => {
                let Some(city) = CityId::new(&city) else {
                    // Placeholder or empty name: membership is unchanged.
                    return Ok(Vec::new());
                };
                let is_favorite = self.favorites.toggle(&mut self.store, &city)?;
                Ok(vec![DashboardEvent::FavoritesChanged {
                    city,
                    is_favorite,
                    favorites: self.favorites.list(),
                }])
            }
            DashboardCommand::OpenHistory => {
                let response = self.api.fetch_history(&HistoryQuery::default()).await?;
                // Stats are derived fresh from the records rather than
                // trusted from the wire.
                let stats = aggregate_stats(&response.history);
                Ok(vec![DashboardEvent::HistoryLoaded {
                    stats,
                    records: response.history,
                }])
            }
            DashboardCommand::ExportHistory => {
                let response = self.api.fetch_history(&HistoryQuery::default()).await?;
                let (file_name, contents) = export_history(&response.history)?;
                Ok(vec![DashboardEvent::ExportReady {
                    file_name,
                    contents,
                }])
            }
            DashboardCommand::CompareCities => {
                let entries = self.api.compare().await?;
                Ok(vec![DashboardEvent::ComparisonLoaded { entries }])
            }
            DashboardCommand::ToggleTheme => {
                let theme = self.theme.toggled();
                save_theme(&mut self.store, theme)?;
                self.theme = theme;
                Ok(vec![DashboardEvent::ThemeChanged { theme }])
            }
        }
    }

    /// Run one prediction submission through the lifecycle.
    async fn submit(&mut self, city: CityId) -> ClientResult<Vec<DashboardEvent>> {
        if !self.lifecycle.begin() {
            return Ok(Vec::new());
        }

        let outcome = self.api.predict(&city).await;

        // Success and failure alike must land back in Idle.
        let events = match outcome {
            Ok(result) => {
                self.lifecycle.succeed();
                let alerts = evaluate_alerts(&result.city_data);
                let is_favorite = CityId::new(&result.city_data.city)
                    .map(|id| self.favorites.contains(&id))
                    .unwrap_or(false);
                vec![DashboardEvent::PredictionReady {
                    result,
                    alerts,
                    is_favorite,
                }]
            }
            Err(err) => {
                let message = err.user_message();
                self.lifecycle.fail(message.clone());
                vec![DashboardEvent::PredictionFailed { message }]
            }
        };
        self.lifecycle.finish();
        Ok(events)
    }
}
