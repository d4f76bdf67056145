//! Client core services

pub mod favorites;
pub mod history;
pub mod lifecycle;
pub mod theme;

pub use favorites::FavoritesStore;
pub use lifecycle::{PredictionLifecycle, SubmissionState};
