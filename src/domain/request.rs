//! Trip request model
//!
//! Holds the user-entered trip parameters, applies single-field edits, and
//! validates the request before submission. The struct serializes directly
//! into the `POST /plan` body, so field names follow the camelCase request
//! contract.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::interest::Interest;

/// Validation failures for a trip request
///
/// Raised before any network call and surfaced as a non-fatal inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Starting point is required")]
    MissingStartingPoint,

    #[error("Destination is required")]
    MissingDestination,

    #[error("At least one traveler is required")]
    NoTravelers,

    #[error("Budget must not be negative")]
    NegativeBudget,
}

/// A single-field edit to a [`TripRequest`]
///
/// Edits are a closed set: there is no way to address an unknown field, so
/// the "unknown field" failure mode is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum TripEdit {
    StartingPoint(String),
    Destination(String),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    Budget(Option<f64>),
    Travelers(u32),
    SpecialRequirements(String),
    IncludeForts(bool),
}

/// User-entered trip parameters
///
/// Owned exclusively by one planner session; there is no shared or global
/// form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub starting_point: String,

    pub destination: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    pub travelers: u32,

    pub interests: BTreeSet<Interest>,

    pub special_requirements: String,

    pub include_forts: bool,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            starting_point: String::new(),
            destination: String::new(),
            start_date: None,
            end_date: None,
            budget: None,
            travelers: 1,
            interests: BTreeSet::new(),
            special_requirements: String::new(),
            include_forts: true,
        }
    }
}

impl TripRequest {
    /// Apply one field edit, preserving all other fields
    ///
    /// A negative budget is rejected at the edit boundary; every other edit
    /// is accepted as-is. Note that no ordering between `start_date` and
    /// `end_date` is enforced anywhere.
    pub fn apply(&mut self, edit: TripEdit) -> Result<(), ValidationError> {
        debug!(?edit, "TripRequest::apply: called");
        match edit {
            TripEdit::StartingPoint(value) => self.starting_point = value,
            TripEdit::Destination(value) => self.destination = value,
            TripEdit::StartDate(value) => self.start_date = value,
            TripEdit::EndDate(value) => self.end_date = value,
            TripEdit::Budget(value) => {
                if value.is_some_and(|b| b < 0.0) {
                    return Err(ValidationError::NegativeBudget);
                }
                self.budget = value;
            }
            TripEdit::Travelers(value) => self.travelers = value,
            TripEdit::SpecialRequirements(value) => self.special_requirements = value,
            TripEdit::IncludeForts(value) => self.include_forts = value,
        }
        Ok(())
    }

    /// Toggle an interest tag: add if absent, remove if present
    ///
    /// Two consecutive toggles of the same tag leave the set unchanged.
    pub fn toggle_interest(&mut self, interest: Interest) {
        debug!(%interest, "TripRequest::toggle_interest: called");
        if !self.interests.insert(interest) {
            self.interests.remove(&interest);
        }
    }

    /// Validate the request for submission
    ///
    /// Returns the first violated constraint: starting point, then
    /// destination, then traveler count. Dates and budget are never checked
    /// here (absent values are valid; budget sign is enforced by [`apply`]).
    ///
    /// [`apply`]: TripRequest::apply
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.starting_point.trim().is_empty() {
            return Err(ValidationError::MissingStartingPoint);
        }
        if self.destination.trim().is_empty() {
            return Err(ValidationError::MissingDestination);
        }
        if self.travelers < 1 {
            return Err(ValidationError::NoTravelers);
        }
        Ok(())
    }
}
