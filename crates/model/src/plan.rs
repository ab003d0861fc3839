use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{day_sheet::DaySheet, stop::StopEvent, timeline::TimelineEvent};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Actual distance/time for one leg (current→pickup or pickup→dropoff), as
/// reported by the routing provider. When absent, `compute_plan` falls back
/// to a 30/70 split of the trip totals (§4.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegOverride {
    pub miles: f64,
    pub minutes: i64,
}

impl LegOverride {
    pub fn new(miles: f64, minutes: i64) -> Self {
        Self { miles, minutes }
    }
}

/// The engine's input surface (§6.1): exactly `compute_plan`'s parameters.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub total_miles: f64,
    pub total_drive_minutes: i64,
    pub cycle_used_hours: f64,
    pub pickup_label: String,
    pub dropoff_label: String,
    pub pickup_coords: Coordinates,
    pub dropoff_coords: Coordinates,
    pub start_date: NaiveDate,
    pub leg1: Option<LegOverride>,
    pub leg2: Option<LegOverride>,
}

/// The engine's output surface (§6.2): exactly six fields, no more, no less.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub timeline: Vec<TimelineEvent>,
    pub stops: Vec<StopEvent>,
    pub daily_sheets: Vec<DaySheet>,
    pub trip_completed: bool,
    pub remaining_drive_minutes: i64,
    pub planned_fuel_stops: u64,
}
