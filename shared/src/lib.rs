//! Shared types and decision logic for the Weather Prediction Dashboard
//!
//! This crate contains the data models and pure computations shared between
//! the client core, the browser surface (via WASM), and tests: alert rule
//! evaluation, history statistics aggregation, CSV export, and favorites
//! set semantics.

pub mod export;
pub mod models;
pub mod types;
pub mod validation;

pub use export::*;
pub use models::*;
pub use types::*;
pub use validation::*;
