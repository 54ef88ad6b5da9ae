//! Submission lifecycle state machine
//!
//! A [`PlannerSession`] owns the submission state for one client session:
//! `Idle → Loading → Succeeded | Failed`, with resubmission allowed from any
//! settled state. At most one request is in flight at a time, and responses
//! arriving for a superseded submission are discarded.
//!
//! The machine is split into [`begin_submit`](PlannerSession::begin_submit)
//! and [`complete`](PlannerSession::complete) so every transition is testable
//! without a network; [`submit`](PlannerSession::submit) drives one full
//! cycle against the owned client.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{TripRequest, ValidationError};
use crate::itinerary::{Itinerary, project};
use crate::planner::{PlannerClient, PlannerError};

/// Submission lifecycle state; exactly one is active at a time
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    /// No submission has run since the session was created or reset
    #[default]
    Idle,
    /// One request is in flight; new submissions are rejected
    Loading,
    /// The last submission produced an itinerary
    Succeeded(Itinerary),
    /// The last submission failed; `message` is ready for display
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }
}

/// Why a submit call was rejected before any request was issued
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// The request failed validation; surfaced inline like a failure, but the
    /// session state is untouched and no call occurs
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// A request is already in flight
    #[error("A request is already in flight")]
    InFlight,
}

/// Proof that a submission was started; pairs a completion with the
/// generation it belongs to
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Owns the request lifecycle for a single client session
pub struct PlannerSession {
    client: Arc<dyn PlannerClient>,
    state: SubmissionState,
    generation: u64,
}

impl PlannerSession {
    pub fn new(client: Arc<dyn PlannerClient>) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
            generation: 0,
        }
    }

    /// Current submission state
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a submission: validate, then transition to `Loading`
    ///
    /// Rejects if a request is already in flight or the request fails
    /// validation; in both cases no outbound call may be made. On success the
    /// prior `Succeeded`/`Failed` state is discarded and the returned ticket
    /// must be handed to [`complete`](PlannerSession::complete).
    pub fn begin_submit(&mut self, request: &TripRequest) -> Result<SubmitTicket, SubmitRejected> {
        if self.state.is_loading() {
            warn!("begin_submit: rejected, request already in flight");
            return Err(SubmitRejected::InFlight);
        }
        request.validate()?;

        self.generation += 1;
        self.state = SubmissionState::Loading;
        debug!(generation = self.generation, "begin_submit: entering Loading");
        Ok(SubmitTicket {
            generation: self.generation,
        })
    }

    /// Settle a submission started by [`begin_submit`](PlannerSession::begin_submit)
    ///
    /// Returns `false` when the outcome was discarded because it no longer
    /// belongs to the current submission (the session was reset or a newer
    /// submission took over).
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<serde_json::Value, PlannerError>) -> bool {
        if ticket.generation != self.generation || !self.state.is_loading() {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "complete: discarding stale outcome"
            );
            return false;
        }

        self.state = match outcome {
            Ok(raw) => {
                debug!(generation = ticket.generation, "complete: succeeded");
                SubmissionState::Succeeded(project(&raw))
            }
            Err(err) => {
                let message = err.user_message();
                debug!(generation = ticket.generation, %message, "complete: failed");
                SubmissionState::Failed { message }
            }
        };
        true
    }

    /// Run one full submission cycle against the owned client
    ///
    /// On `Ok` the session has settled into `Succeeded` or `Failed`; on `Err`
    /// the submission was rejected pre-flight and no call was made.
    pub async fn submit(&mut self, request: &TripRequest) -> Result<&SubmissionState, SubmitRejected> {
        let ticket = self.begin_submit(request)?;
        let client = self.client.clone();
        let outcome = client.plan(request).await;
        self.complete(ticket, outcome);
        Ok(&self.state)
    }

    /// Abandon the session's current submission, if any
    ///
    /// Used on teardown: the state returns to `Idle` and any response still
    /// in flight will be discarded by its stale ticket.
    pub fn reset(&mut self) {
        debug!(generation = self.generation, "reset: called");
        self.generation += 1;
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock client that counts calls and replays a canned outcome
    struct MockPlanner {
        calls: AtomicUsize,
        payload: Option<Value>,
    }

    impl MockPlanner {
        fn succeeding(payload: Value) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                payload: Some(payload),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                payload: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlannerClient for MockPlanner {
        async fn plan(&self, _request: &TripRequest) -> Result<Value, PlannerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.payload {
                Some(payload) => Ok(payload.clone()),
                None => Err(PlannerError::Api {
                    status: 503,
                    message: String::new(),
                }),
            }
        }
    }

    fn valid_request() -> TripRequest {
        let mut request = TripRequest::default();
        request.starting_point = "Delhi".to_string();
        request.destination = "Jaipur".to_string();
        request
    }

    #[tokio::test]
    async fn test_submit_success_transitions_to_succeeded() {
        let client = Arc::new(MockPlanner::succeeding(json!({
            "summary": { "budget_status": "within budget" }
        })));
        let mut session = PlannerSession::new(client.clone());

        let state = session.submit(&valid_request()).await.unwrap();
        match state {
            SubmissionState::Succeeded(itinerary) => {
                assert_eq!(itinerary.summary.budget_status, "within budget");
            }
            other => panic!("expected Succeeded, got {other:?}"),
        }
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_transitions_to_failed_with_message() {
        let client = Arc::new(MockPlanner::failing());
        let mut session = PlannerSession::new(client);

        let state = session.submit(&valid_request()).await.unwrap();
        match state {
            SubmissionState::Failed { message } => assert!(!message.is_empty()),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_any_call() {
        let client = Arc::new(MockPlanner::succeeding(json!({})));
        let mut session = PlannerSession::new(client.clone());

        let rejection = session.submit(&TripRequest::default()).await.unwrap_err();
        assert_eq!(
            rejection,
            SubmitRejected::Invalid(ValidationError::MissingStartingPoint)
        );
        assert!(matches!(session.state(), SubmissionState::Idle));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_second_submit_rejected_while_loading() {
        let client = Arc::new(MockPlanner::succeeding(json!({})));
        let mut session = PlannerSession::new(client);
        let request = valid_request();

        let ticket = session.begin_submit(&request).unwrap();
        assert!(session.state().is_loading());

        // A rapid second submit must not start a second request.
        assert_eq!(session.begin_submit(&request), Err(SubmitRejected::InFlight));
        assert!(session.state().is_loading());

        assert!(session.complete(ticket, Ok(json!({}))));
        assert!(matches!(session.state(), SubmissionState::Succeeded(_)));
    }

    #[test]
    fn test_resubmit_from_settled_state_discards_prior_result() {
        let client = Arc::new(MockPlanner::succeeding(json!({})));
        let mut session = PlannerSession::new(client);
        let request = valid_request();

        let ticket = session.begin_submit(&request).unwrap();
        session.complete(ticket, Ok(json!({ "summary": { "budget_status": "over budget" } })));

        let ticket = session.begin_submit(&request).unwrap();
        assert!(session.state().is_loading());
        session.complete(
            ticket,
            Err(PlannerError::Api {
                status: 500,
                message: "Not possible in this budget, increase your budget".to_string(),
            }),
        );
        match session.state() {
            SubmissionState::Failed { message } => {
                assert_eq!(message, "Not possible in this budget, increase your budget");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_outcome_discarded_after_reset() {
        let client = Arc::new(MockPlanner::succeeding(json!({})));
        let mut session = PlannerSession::new(client);

        let ticket = session.begin_submit(&valid_request()).unwrap();
        session.reset();

        // The late response must not be applied to the reset session.
        assert!(!session.complete(ticket, Ok(json!({ "summary": {} }))));
        assert!(matches!(session.state(), SubmissionState::Idle));
    }
}
