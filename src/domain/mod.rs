//! Trip request domain types
//!
//! The mutable request model edited by the user, the fixed interest
//! vocabulary, and submission-time validation.

mod interest;
mod request;

pub use interest::Interest;
pub use request::{TripEdit, TripRequest, ValidationError};
