use chrono::{DateTime, NaiveDate, Utc};
use model::{Coordinates, DaySheet, DutyStatus, PlanRequest, PlanResult, Segment, StopEvent, StopKind};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct TripPlanRow {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
    pub routing_provider: String,
    pub total_miles: f64,
    pub total_drive_minutes: i64,
    pub route_polyline: String,
    pub current_location_lat: f64,
    pub current_location_lng: f64,
    pub pickup_location_lat: f64,
    pub pickup_location_lng: f64,
    pub dropoff_location_lat: f64,
    pub dropoff_location_lng: f64,
    pub trip_completed: bool,
    pub remaining_drive_minutes: i64,
    pub planned_fuel_stops: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StopRow {
    pub id: Uuid,
    pub trip_plan_id: Uuid,
    pub kind: String,
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub start_minute_global: i64,
    pub duration_minutes: i64,
}

impl StopRow {
    pub fn into_stop_event(self) -> StopEvent {
        let kind: StopKind = self.kind.parse().unwrap_or(StopKind::Fuel);
        StopEvent::new(kind, self.start_minute_global, self.duration_minutes, self.label)
            .with_coords(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DailySheetRow {
    pub id: Uuid,
    pub trip_plan_id: Uuid,
    pub date: NaiveDate,
    pub total_miles_today: f64,
}

#[derive(Debug, Clone, FromRow)]
pub struct SegmentRow {
    pub id: Uuid,
    pub daily_sheet_id: Uuid,
    pub start_minute: i64,
    pub end_minute: i64,
    pub status: String,
    pub location_label: String,
}

impl SegmentRow {
    pub fn into_segment(self) -> Segment {
        let status: DutyStatus = self.status.parse().unwrap_or(DutyStatus::OffDuty);
        Segment {
            start_minute: self.start_minute,
            end_minute: self.end_minute,
            status,
            location_label: self.location_label,
        }
    }
}

/// The full, denormalized read model for one trip plan — rows gathered
/// across all four tables, re-assembled into the engine's own value shapes.
#[derive(Debug, Clone)]
pub struct TripPlanRecord {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
    pub routing_provider: String,
    pub total_miles: f64,
    pub total_drive_minutes: i64,
    pub route_polyline: String,
    pub current_coords: Coordinates,
    pub pickup_coords: Coordinates,
    pub dropoff_coords: Coordinates,
    pub result: PlanResult,
    pub created_at: DateTime<Utc>,
}

impl TripPlanRecord {
    pub(crate) fn assemble(
        trip: TripPlanRow,
        stops: Vec<StopRow>,
        sheets: Vec<(DailySheetRow, Vec<SegmentRow>)>,
    ) -> Self {
        let daily_sheets = sheets
            .into_iter()
            .map(|(sheet, segments)| DaySheet {
                date: sheet.date,
                segments: segments.into_iter().map(SegmentRow::into_segment).collect(),
                total_miles: sheet.total_miles_today,
            })
            .collect();

        let stop_events: Vec<StopEvent> = stops.into_iter().map(StopRow::into_stop_event).collect();

        Self {
            id: trip.id,
            current_location: trip.current_location,
            pickup_location: trip.pickup_location,
            dropoff_location: trip.dropoff_location,
            cycle_used_hours: trip.cycle_used_hours,
            routing_provider: trip.routing_provider,
            total_miles: trip.total_miles,
            total_drive_minutes: trip.total_drive_minutes,
            route_polyline: trip.route_polyline,
            current_coords: Coordinates::new(trip.current_location_lat, trip.current_location_lng),
            pickup_coords: Coordinates::new(trip.pickup_location_lat, trip.pickup_location_lng),
            dropoff_coords: Coordinates::new(trip.dropoff_location_lat, trip.dropoff_location_lng),
            result: PlanResult {
                timeline: Vec::new(),
                stops: stop_events,
                daily_sheets,
                trip_completed: trip.trip_completed,
                remaining_drive_minutes: trip.remaining_drive_minutes,
                planned_fuel_stops: trip.planned_fuel_stops.max(0) as u64,
            },
            created_at: trip.created_at,
        }
    }
}

/// What `insert_trip_plan` persists: the request that produced a plan plus
/// the engine's own output. The engine emits no identifiers — the caller
/// supplies `current_location`/labels/coords that aren't part of `PlanRequest`.
#[derive(Debug, Clone)]
pub struct NewTripPlan {
    pub current_location: String,
    pub current_coords: Coordinates,
    pub request: PlanRequest,
    pub routing_provider: String,
    pub route_polyline: String,
    pub result: PlanResult,
}
