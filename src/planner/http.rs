//! HTTP planner client
//!
//! Issues the single `POST /plan` call against the configured service and
//! returns the raw payload for projection. No retries: a submission is one
//! attempt, and recovery is the user's resubmit.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{PlannerClient, PlannerError};
use crate::config::PlannerConfig;
use crate::domain::TripRequest;

/// Error payload the service sends alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Planner client over HTTP
pub struct HttpPlannerClient {
    base_url: String,
    http: Client,
}

impl HttpPlannerClient {
    /// Create a client from configuration
    pub fn from_config(config: &PlannerConfig) -> Result<Self, PlannerError> {
        debug!(?config, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(PlannerError::Network)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Extract the server-supplied error message from a failure body, if any
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(message) }) => message,
            _ => String::new(),
        }
    }
}

#[async_trait]
impl PlannerClient for HttpPlannerClient {
    async fn plan(&self, request: &TripRequest) -> Result<Value, PlannerError> {
        let url = format!("{}/plan", self.base_url);
        debug!(%url, destination = %request.destination, "plan: submitting request");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::error_message(&body);
            debug!(status = status.as_u16(), %message, "plan: service returned error status");
            return Err(PlannerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let raw: Value = serde_json::from_str(&body)?;
        debug!("plan: received payload");
        Ok(raw)
    }
}
