//! Prediction request lifecycle
//!
//! One submission moves through `Idle -> Submitting -> {Succeeded, Failed}
//! -> Idle`. The guard against overlapping submissions lives here, in the
//! state machine, not in any UI control's enabled/disabled attribute: a
//! second `begin` while a request is in flight is rejected outright.

use chrono::{DateTime, Utc};

/// Progress of the current (or last) prediction submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No request in flight; submissions are accepted
    Idle,
    /// A request is in flight; further submissions are rejected
    Submitting { since: DateTime<Utc> },
    /// The response arrived and is awaiting hand-off to the renderer
    Succeeded,
    /// The attempt failed; the message is awaiting hand-off to the renderer
    Failed { message: String },
}

/// State machine governing one prediction submission at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionLifecycle {
    state: SubmissionState,
}

impl Default for PredictionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionLifecycle {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Try to start a submission. Returns `false` (and changes nothing) if
    /// one is already in flight.
    pub fn begin(&mut self) -> bool {
        match self.state {
            SubmissionState::Idle => {
                self.state = SubmissionState::Submitting { since: Utc::now() };
                true
            }
            _ => {
                tracing::debug!(state = ?self.state, "submission rejected while busy");
                false
            }
        }
    }

    /// Record a successful response. Only meaningful while submitting.
    pub fn succeed(&mut self) {
        if self.is_submitting() {
            self.state = SubmissionState::Succeeded;
        }
    }

    /// Record a failed attempt. Only meaningful while submitting.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_submitting() {
            self.state = SubmissionState::Failed {
                message: message.into(),
            };
        }
    }

    /// Hand the outcome to the renderer and re-enable submission.
    ///
    /// This is the unconditional cleanup step: it runs after success and
    /// failure alike, so the machine can never be stuck outside `Idle`.
    pub fn finish(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_from_idle() {
        let mut lifecycle = PredictionLifecycle::new();
        assert!(lifecycle.begin());
        assert!(lifecycle.is_submitting());
    }

    #[test]
    fn test_reentrant_begin_is_rejected() {
        let mut lifecycle = PredictionLifecycle::new();
        assert!(lifecycle.begin());

        // The second submission is a no-op; the first continues normally.
        assert!(!lifecycle.begin());
        assert!(lifecycle.is_submitting());

        lifecycle.succeed();
        assert_eq!(*lifecycle.state(), SubmissionState::Succeeded);
        lifecycle.finish();
        assert_eq!(*lifecycle.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_failure_path_returns_to_idle() {
        let mut lifecycle = PredictionLifecycle::new();
        lifecycle.begin();
        lifecycle.fail("Could not fetch weather data");
        assert_eq!(
            *lifecycle.state(),
            SubmissionState::Failed {
                message: "Could not fetch weather data".to_string()
            }
        );
        lifecycle.finish();
        assert!(lifecycle.begin());
    }

    #[test]
    fn test_outcome_ignored_when_not_submitting() {
        let mut lifecycle = PredictionLifecycle::new();
        lifecycle.succeed();
        assert_eq!(*lifecycle.state(), SubmissionState::Idle);
        lifecycle.fail("late failure");
        assert_eq!(*lifecycle.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_finish_is_unconditional() {
        let mut lifecycle = PredictionLifecycle::new();
        lifecycle.finish();
        assert_eq!(*lifecycle.state(), SubmissionState::Idle);

        lifecycle.begin();
        lifecycle.finish();
        assert_eq!(*lifecycle.state(), SubmissionState::Idle);
    }
}
