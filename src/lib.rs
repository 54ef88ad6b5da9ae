//! tripcraft - trip planning client
//!
//! Client workflow for a remote itinerary generation service: collect trip
//! parameters, submit them once per request to `POST /plan`, and project the
//! loosely-structured response into a render-safe view model.
//!
//! # Modules
//!
//! - [`domain`] - Trip request model, interest vocabulary, validation
//! - [`session`] - Submission lifecycle state machine
//! - [`planner`] - Planning service client trait and HTTP implementation
//! - [`itinerary`] - View model types and the total projection
//! - [`render`] - Terminal presentation of the view model
//! - [`maps`] - Map embed URL construction
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod itinerary;
pub mod maps;
pub mod planner;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use config::{Config, PlannerConfig};
pub use domain::{Interest, TripEdit, TripRequest, ValidationError};
pub use itinerary::{Itinerary, TransportKind, project};
pub use planner::{HttpPlannerClient, PlannerClient, PlannerError};
pub use session::{PlannerSession, SubmissionState, SubmitRejected, SubmitTicket};
