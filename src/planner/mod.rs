//! Planning service client
//!
//! The [`PlannerClient`] trait is the seam between the submission state
//! machine and the outbound HTTP call, which keeps the state machine testable
//! without a network.

use async_trait::async_trait;
use serde_json::Value;

mod error;
mod http;

pub use error::{GENERIC_FAILURE, PlannerError};
pub use http::HttpPlannerClient;

use crate::domain::TripRequest;

/// A client that can turn a trip request into a raw itinerary payload
///
/// Implementations perform exactly one outbound call per invocation. The
/// payload is returned untyped; normalization happens in
/// [`itinerary::project`](crate::itinerary::project).
#[async_trait]
pub trait PlannerClient: Send + Sync {
    async fn plan(&self, request: &TripRequest) -> Result<Value, PlannerError>;
}
