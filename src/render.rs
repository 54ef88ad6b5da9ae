//! Terminal presentation of the itinerary view model
//!
//! Thin by design: everything here reads the already-normalized
//! [`Itinerary`], so there is no defaulting or error handling left to do.
//! Mirrors the sections the original client paints: journey route, local
//! transport, themed summary with forts, then the day-by-day plan.

use std::fmt::Write;

use colored::Colorize;

use crate::domain::TripRequest;
use crate::itinerary::Itinerary;
use crate::maps;

/// Render the itinerary as human-readable text
///
/// The request supplies the destination label, which the service echoes only
/// in prose.
pub fn render_text(request: &TripRequest, itinerary: &Itinerary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Your Journey Route".bold().underline());
    let start_label = if itinerary.starting_point.address.is_empty() {
        &request.starting_point
    } else {
        &itinerary.starting_point.address
    };
    let _ = writeln!(out, "  {}", maps::route_embed_url(start_label, &request.destination).dimmed());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Starting Point".bold());
    let _ = writeln!(out, "  {}", itinerary.starting_point.name);
    let _ = writeln!(out, "  {}", itinerary.starting_point.address);
    if let Some(description) = &itinerary.starting_point.description {
        let _ = writeln!(out, "  {}", description.italic());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Destination".bold());
    let _ = writeln!(out, "  {}", request.destination);
    if let Some(description) = &itinerary.summary.destination_description {
        let _ = writeln!(out, "  {}", description.italic());
    }
    let _ = writeln!(out);

    if !itinerary.local_transport.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("Local Transportation Options at {}", request.destination).bold().underline()
        );
        for transport in &itinerary.local_transport {
            let _ = writeln!(out, "  {} {}", transport.kind.glyph(), transport.name.bold());
            let _ = writeln!(out, "     {}", transport.description);
            let cost = transport.cost.as_deref().unwrap_or("Varies");
            let _ = write!(out, "     💵 {}", cost);
            if let Some(tips) = &transport.tips {
                let _ = write!(out, "   💡 {}", tips);
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out);
    }

    let title = if itinerary.summary.key_themes.is_empty() {
        "Your Itinerary".to_string()
    } else {
        format!("Your {} Itinerary", itinerary.summary.key_themes.join(", "))
    };
    let _ = writeln!(out, "{}", title.bold().underline());
    let _ = writeln!(out, "  Total Estimated Cost: {}", itinerary.summary.total_estimated_cost);
    let _ = writeln!(out, "  Budget Status: {}", itinerary.summary.budget_status);
    if !itinerary.summary.forts_visited.is_empty() {
        let _ = writeln!(out, "  {}", "Forts You'll Visit:".bold());
        for fort in &itinerary.summary.forts_visited {
            let _ = writeln!(out, "    🏰 {}", fort);
        }
    }
    let _ = writeln!(out);

    for day in &itinerary.days {
        let heading = match &day.date {
            Some(date) => format!("Day {} ({})", day.day_number, date),
            None => format!("Day {}", day.day_number),
        };
        let _ = writeln!(out, "{}", heading.bold());
        for activity in &day.activities {
            let badge = if activity.location.as_ref().is_some_and(|l| l.is_fort()) {
                " 🏰 Fort Visit"
            } else {
                ""
            };
            let _ = writeln!(out, "  {} — {}{}", activity.time.cyan(), activity.description, badge.yellow());
            let _ = write!(out, "     ⏱️ {}   💰 {}", activity.duration, activity.cost);
            if let Some(transportation) = &activity.transportation {
                let _ = write!(out, "   🚗 {}", transportation);
            }
            let _ = writeln!(out);
            if let Some(location) = &activity.location {
                let _ = writeln!(out, "     📍 {}, {}", location.name, location.address);
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", "Destination Map".bold().underline());
    let _ = writeln!(out, "  {}", maps::place_embed_url(&request.destination).dimmed());

    out
}

/// Render the itinerary as JSON for scripting
pub fn render_json(itinerary: &Itinerary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(itinerary)
}
