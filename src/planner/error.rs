//! Planner client error types

use thiserror::Error;

/// Generic failure message shown when the service supplies nothing better
pub const GENERIC_FAILURE: &str = "Failed to generate itinerary";

/// Errors from talking to the planning service
///
/// Shape problems in an otherwise successful response are deliberately not
/// represented here: the projection absorbs those field-by-field instead of
/// failing the submission.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Connection-level failure; no response was received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service responded with an error status; `message` carries the
    /// server-supplied error text when the payload included one
    #[error("Planner error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not JSON at all
    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    /// Human-readable message for the failed submission state
    ///
    /// A server-supplied message takes precedence; everything else collapses
    /// to the generic failure text.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
