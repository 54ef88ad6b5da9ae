//! Itinerary view model and projection
//!
//! The planning service returns a loosely-structured JSON payload (snake_case
//! keys, any subtree may be missing). [`project`] maps it into a fully
//! populated, render-safe [`Itinerary`]: every absent field becomes an
//! explicit empty/`None` value and the function never panics. The casing
//! difference between the camelCase request body and the snake_case response
//! is part of the service contract; this module is where the translation
//! lives.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

mod transport;

pub use transport::{FALLBACK_GLYPH, TransportKind};

/// Where the journey begins, as described by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartingPoint {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Trip-level summary block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Key themes in service order; joining for display is the renderer's job
    pub key_themes: Vec<String>,
    pub total_estimated_cost: String,
    pub budget_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_description: Option<String>,
    pub forts_visited: Vec<String>,
}

/// A local transport option at the destination
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub kind: TransportKind,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

/// Where an activity takes place
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    /// Presentation discriminator; `"fort"` triggers the fort badge and
    /// carries no other semantic weight
    #[serde(rename = "type")]
    pub kind: String,
}

impl Location {
    /// Whether this location is tagged as a historical fort
    pub fn is_fort(&self) -> bool {
        self.kind == "fort"
    }
}

/// One scheduled activity within a day
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Activity {
    pub time: String,
    pub description: String,
    pub duration: String,
    pub cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// One day of the trip, activities in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Day {
    pub day_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub activities: Vec<Activity>,
}

/// The normalized view model the rendering layer consumes
///
/// Immutable once constructed; rebuilt wholesale from each successful
/// response, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Itinerary {
    pub starting_point: StartingPoint,
    pub summary: Summary,
    pub local_transport: Vec<TransportOption>,
    pub days: Vec<Day>,
}

impl Itinerary {
    /// Count fort-tagged activity locations across all days
    pub fn fort_activity_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| &day.activities)
            .filter(|activity| activity.location.as_ref().is_some_and(Location::is_fort))
            .count()
    }
}

/// Project a raw response payload into an [`Itinerary`]
///
/// Total over any JSON value, including `{}` and non-objects: missing or
/// mistyped subtrees degrade field-by-field to defaults rather than aborting
/// the render.
pub fn project(raw: &Value) -> Itinerary {
    debug!("project: called");
    Itinerary {
        starting_point: project_starting_point(raw.get("starting_point")),
        summary: project_summary(raw.get("summary")),
        local_transport: project_local_transport(raw.get("local_transport")),
        days: project_days(raw.get("itinerary")),
    }
}

fn project_starting_point(raw: Option<&Value>) -> StartingPoint {
    let Some(raw) = raw else {
        return StartingPoint::default();
    };
    StartingPoint {
        name: text(raw, "name"),
        address: text(raw, "address"),
        description: opt_text(raw, "description"),
    }
}

fn project_summary(raw: Option<&Value>) -> Summary {
    let Some(raw) = raw else {
        return Summary::default();
    };
    Summary {
        key_themes: text_list(raw.get("key_themes")),
        total_estimated_cost: text(raw, "total_estimated_cost"),
        budget_status: text(raw, "budget_status"),
        destination_description: opt_text(raw, "destination_description"),
        forts_visited: text_list(raw.get("forts_visited")),
    }
}

fn project_local_transport(raw: Option<&Value>) -> Vec<TransportOption> {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| TransportOption {
            kind: TransportKind::parse(&text(entry, "type")),
            name: text(entry, "name"),
            description: text(entry, "description"),
            cost: opt_text(entry, "cost"),
            tips: opt_text(entry, "tips"),
        })
        .collect()
}

fn project_days(raw: Option<&Value>) -> Vec<Day> {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    // Ordering is significant: days and activities stay in response order.
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Day {
            day_number: entry
                .get("day")
                .and_then(Value::as_u64)
                .unwrap_or(index as u64 + 1),
            date: opt_text(entry, "date"),
            activities: project_activities(entry.get("activities")),
        })
        .collect()
}

fn project_activities(raw: Option<&Value>) -> Vec<Activity> {
    let Some(entries) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|entry| Activity {
            time: text(entry, "time"),
            description: text(entry, "description"),
            duration: text(entry, "duration"),
            cost: text(entry, "cost"),
            transportation: opt_text(entry, "transportation"),
            location: project_location(entry.get("location")),
        })
        .collect()
}

fn project_location(raw: Option<&Value>) -> Option<Location> {
    let raw = raw?;
    if !raw.is_object() {
        return None;
    }
    Some(Location {
        name: text(raw, "name"),
        address: text(raw, "address"),
        kind: text(raw, "type"),
    })
}

/// String field with empty-string default for missing or mistyped values
fn text(raw: &Value, key: &str) -> String {
    raw.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Optional string field; absent, mistyped, and empty all map to `None`
fn opt_text(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Array of strings, skipping non-string entries
fn text_list(raw: Option<&Value>) -> Vec<String> {
    raw.and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_empty_object_is_fully_populated() {
        let itinerary = project(&json!({}));
        assert_eq!(itinerary, Itinerary::default());
        assert!(itinerary.summary.key_themes.is_empty());
        assert!(itinerary.days.is_empty());
    }

    #[test]
    fn test_project_tolerates_non_object_payloads() {
        for raw in [json!(null), json!("oops"), json!(42), json!([1, 2, 3])] {
            assert_eq!(project(&raw), Itinerary::default());
        }
    }

    #[test]
    fn test_project_tolerates_mistyped_subtrees() {
        let raw = json!({
            "starting_point": "not an object",
            "summary": { "key_themes": "not an array", "total_estimated_cost": 12000 },
            "local_transport": { "type": "metro" },
            "itinerary": "tuesday"
        });
        let itinerary = project(&raw);
        assert_eq!(itinerary.starting_point, StartingPoint::default());
        assert!(itinerary.summary.key_themes.is_empty());
        assert_eq!(itinerary.summary.total_estimated_cost, "");
        assert!(itinerary.local_transport.is_empty());
        assert!(itinerary.days.is_empty());
    }

    #[test]
    fn test_project_full_payload() {
        let raw = json!({
            "starting_point": {
                "name": "New Delhi Railway Station",
                "address": "Bhavbhuti Marg, New Delhi",
                "description": "Central departure hub"
            },
            "summary": {
                "total_estimated_cost": "₹18,500",
                "budget_status": "within budget",
                "key_themes": ["History", "Architecture"],
                "forts_visited": ["Amber Fort"],
                "destination_description": "The Pink City"
            },
            "local_transport": [
                { "type": "metro", "name": "Jaipur Metro", "description": "Two-line rapid transit", "cost": "₹20", "tips": "Buy a smart card" },
                { "type": "rideshare", "name": "City Cabs", "description": "App-based taxis" }
            ],
            "itinerary": [
                {
                    "day": 1,
                    "date": "2026-03-01",
                    "activities": [
                        {
                            "time": "Morning",
                            "description": "Visit Amber Fort",
                            "duration": "3 hours",
                            "cost": "₹500",
                            "transportation": "Taxi",
                            "location": { "name": "Amber Fort", "address": "Devisinghpura, Amer", "type": "fort" }
                        },
                        {
                            "time": "Evening",
                            "description": "Johari Bazaar walk",
                            "duration": "2 hours",
                            "cost": "₹0"
                        }
                    ]
                },
                { "day": 2, "activities": [] }
            ]
        });

        let itinerary = project(&raw);

        assert_eq!(itinerary.starting_point.name, "New Delhi Railway Station");
        assert_eq!(itinerary.summary.key_themes, vec!["History", "Architecture"]);
        assert_eq!(itinerary.summary.forts_visited, vec!["Amber Fort"]);
        assert_eq!(itinerary.local_transport.len(), 2);
        assert_eq!(itinerary.local_transport[0].kind, TransportKind::Metro);
        assert_eq!(itinerary.local_transport[1].cost, None);
        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.days[0].day_number, 1);
        assert_eq!(itinerary.days[0].activities.len(), 2);

        let fort_visit = &itinerary.days[0].activities[0];
        assert!(fort_visit.location.as_ref().unwrap().is_fort());
        assert!(itinerary.days[0].activities[1].location.is_none());
        assert_eq!(itinerary.fort_activity_count(), 1);
    }

    #[test]
    fn test_project_preserves_day_and_activity_order() {
        let raw = json!({
            "itinerary": [
                { "day": 3, "activities": [ { "time": "Evening" }, { "time": "Morning" } ] },
                { "day": 1, "activities": [] }
            ]
        });
        let itinerary = project(&raw);
        // Response order wins, even when day numbers are out of sequence.
        assert_eq!(itinerary.days[0].day_number, 3);
        assert_eq!(itinerary.days[1].day_number, 1);
        assert_eq!(itinerary.days[0].activities[0].time, "Evening");
        assert_eq!(itinerary.days[0].activities[1].time, "Morning");
    }

    #[test]
    fn test_project_numbers_days_when_absent() {
        let raw = json!({ "itinerary": [ {}, {} ] });
        let itinerary = project(&raw);
        assert_eq!(itinerary.days[0].day_number, 1);
        assert_eq!(itinerary.days[1].day_number, 2);
    }

    #[test]
    fn test_unknown_transport_kind_keeps_fallback_glyph() {
        let raw = json!({ "local_transport": [ { "type": "hoverboard", "name": "Hover Hub" } ] });
        let itinerary = project(&raw);
        assert_eq!(itinerary.local_transport[0].kind.glyph(), FALLBACK_GLYPH);
        assert_eq!(itinerary.local_transport[0].name, "Hover Hub");
    }
}
