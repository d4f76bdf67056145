//! Domain models for the Weather Prediction Dashboard

mod alerts;
mod favorites;
mod history;
mod prediction;
mod weather;

pub use alerts::*;
pub use favorites::*;
pub use history::*;
pub use prediction::*;
pub use weather::*;
