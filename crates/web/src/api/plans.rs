use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use database::NewTripPlan;
use model::{Coordinates, DaySheet, DutyStatus, LegOverride, PlanRequest, Segment, StopEvent};
use routing::polyline::interpolate_stop_positions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::rounding::round_to;
use uuid::Uuid;

use crate::common::{RouteErrorResponse, RouteResult};
use crate::WebState;

const ROUTING_PROVIDER: &str = "openrouteservice";

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/plans", get(list_plans))
        .route("/plans/:id", get(get_plan))
        .with_state(state)
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePlanRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    pub pickup_lat: Option<f64>,
    pub pickup_lng: Option<f64>,
    pub dropoff_lat: Option<f64>,
    pub dropoff_lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanSummary {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
    pub total_miles: f64,
    pub total_drive_minutes: i64,
    pub trip_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<database::TripPlanRow> for TripPlanSummary {
    fn from(row: database::TripPlanRow) -> Self {
        Self {
            id: row.id,
            current_location: row.current_location,
            pickup_location: row.pickup_location,
            dropoff_location: row.dropoff_location,
            cycle_used_hours: row.cycle_used_hours,
            total_miles: row.total_miles,
            total_drive_minutes: row.total_drive_minutes,
            trip_completed: row.trip_completed,
            created_at: row.created_at,
        }
    }
}

/// One duty-status change within a day sheet: the clock time it started,
/// the status it changed to, and where the driver was.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Remark {
    pub time: String,
    pub status: DutyStatus,
    pub location: String,
}

/// A day sheet plus the two figures a paper log actually carries: minutes
/// per duty status for the day, and a remark at every status change.
/// Derived here rather than by the engine — `DaySheet`/`Segment` stay a pure
/// record of the timeline slice.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DaySheetFull {
    pub date: NaiveDate,
    pub segments: Vec<Segment>,
    pub total_miles: f64,
    pub totals: HashMap<String, i64>,
    pub remarks: Vec<Remark>,
}

/// Minutes per duty status across one day's segments. Always carries all
/// four statuses, zero-filled, so the four values sum to 1440.
fn day_sheet_totals(segments: &[Segment]) -> HashMap<String, i64> {
    let mut totals = HashMap::from([
        (DutyStatus::OffDuty.as_str().to_owned(), 0i64),
        (DutyStatus::Sleeper.as_str().to_owned(), 0i64),
        (DutyStatus::Driving.as_str().to_owned(), 0i64),
        (DutyStatus::OnDutyNotDriving.as_str().to_owned(), 0i64),
    ]);
    for segment in segments {
        *totals.entry(segment.status.as_str().to_owned()).or_insert(0) += segment.duration();
    }
    totals
}

/// One remark per duty-status change, in segment order, including the
/// first segment unconditionally.
fn day_sheet_remarks(segments: &[Segment]) -> Vec<Remark> {
    let mut remarks = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 || segment.status != segments[i - 1].status {
            remarks.push(Remark {
                time: format!("{:02}:{:02}", segment.start_minute / 60, segment.start_minute % 60),
                status: segment.status,
                location: segment.location_label.clone(),
            });
        }
    }
    remarks
}

impl From<DaySheet> for DaySheetFull {
    fn from(sheet: DaySheet) -> Self {
        Self {
            date: sheet.date,
            totals: day_sheet_totals(&sheet.segments),
            remarks: day_sheet_remarks(&sheet.segments),
            segments: sheet.segments,
            total_miles: sheet.total_miles,
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanFull {
    pub id: Uuid,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub cycle_used_hours: f64,
    pub routing_provider: String,
    pub total_miles: f64,
    pub total_drive_minutes: i64,
    pub route_polyline: String,
    pub trip_completed: bool,
    pub remaining_drive_minutes: i64,
    pub planned_fuel_stops: u64,
    pub stops: Vec<StopEvent>,
    pub daily_sheets: Vec<DaySheetFull>,
    pub created_at: DateTime<Utc>,
}

impl From<database::TripPlanRecord> for TripPlanFull {
    fn from(record: database::TripPlanRecord) -> Self {
        Self {
            id: record.id,
            current_location: record.current_location,
            pickup_location: record.pickup_location,
            dropoff_location: record.dropoff_location,
            cycle_used_hours: record.cycle_used_hours,
            routing_provider: record.routing_provider,
            total_miles: record.total_miles,
            total_drive_minutes: record.total_drive_minutes,
            route_polyline: record.route_polyline,
            trip_completed: record.result.trip_completed,
            remaining_drive_minutes: record.result.remaining_drive_minutes,
            planned_fuel_stops: record.result.planned_fuel_stops,
            stops: record.result.stops,
            daily_sheets: record.result.daily_sheets.into_iter().map(DaySheetFull::from).collect(),
            created_at: record.created_at,
        }
    }
}

/// Resolve a location to coordinates: the caller's own lat/lng if supplied,
/// geocoding the label otherwise.
async fn resolve_coords(
    routing: &dyn routing::RoutingProvider,
    label: &str,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Result<Coordinates, routing::RoutingError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
        _ => routing.geocode(label).await,
    }
}

/// `POST /api/plan` — geocode the three locations (unless coordinates were
/// supplied directly), fetch driving directions between them, run the HOS
/// engine, interpolate stop positions along the route, and persist the
/// result.
async fn create_plan(
    State(state): State<WebState>,
    Json(body): Json<CreatePlanRequest>,
) -> RouteResult<(StatusCode, Json<TripPlanFull>)> {
    let err_context =
        |why: RouteErrorResponse| why.with_method(&Method::POST).with_uri("/api/plan");

    let current_coords = resolve_coords(
        state.routing.as_ref(),
        &body.current_location,
        body.current_lat,
        body.current_lng,
    )
    .await
    .map_err(|why| err_context(why.into()))?;

    let pickup_coords = resolve_coords(
        state.routing.as_ref(),
        &body.pickup_location,
        body.pickup_lat,
        body.pickup_lng,
    )
    .await
    .map_err(|why| err_context(why.into()))?;

    let dropoff_coords = resolve_coords(
        state.routing.as_ref(),
        &body.dropoff_location,
        body.dropoff_lat,
        body.dropoff_lng,
    )
    .await
    .map_err(|why| err_context(why.into()))?;

    let route = state
        .routing
        .directions(&[current_coords, pickup_coords, dropoff_coords])
        .await
        .map_err(|why| err_context(why.into()))?;

    let total_miles = route.distance_miles;
    let total_drive_minutes = route.duration_minutes;

    let (leg1, leg2) = match route.legs.as_slice() {
        [first, second, ..] => (
            Some(LegOverride::new(first.distance_miles, first.duration_minutes)),
            Some(LegOverride::new(second.distance_miles, second.duration_minutes)),
        ),
        _ => (None, None),
    };

    let request = PlanRequest {
        total_miles,
        total_drive_minutes,
        cycle_used_hours: body.cycle_used_hours,
        pickup_label: body.pickup_location.clone(),
        dropoff_label: body.dropoff_location.clone(),
        pickup_coords,
        dropoff_coords,
        start_date: today(),
        leg1,
        leg2,
    };

    let mut result = hos_engine::compute_plan(&request);
    interpolate_stop_positions(&mut result.stops, &result.timeline, &route.geometry, total_drive_minutes);

    let mut persisted_request = request;
    persisted_request.total_miles = round_to(persisted_request.total_miles, 1);

    let new_plan = NewTripPlan {
        current_location: body.current_location,
        current_coords,
        request: persisted_request,
        routing_provider: ROUTING_PROVIDER.to_owned(),
        route_polyline: route.geometry,
        result,
    };

    let id = state.database.insert_plan(&new_plan).await.map_err(|why| err_context(why.into()))?;
    let record = state.database.get_plan(id).await.map_err(|why| err_context(why.into()))?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `GET /api/plans` — newest-first summary rows.
async fn list_plans(State(state): State<WebState>) -> RouteResult<Json<Vec<TripPlanSummary>>> {
    let rows = state.database.list_plans().await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri("/api/plans")
    })?;
    Ok(Json(rows.into_iter().map(TripPlanSummary::from).collect()))
}

/// `GET /api/plans/:id` — the full nested plan, or 404.
async fn get_plan(
    State(state): State<WebState>,
    Path(id): Path<Uuid>,
) -> RouteResult<Json<TripPlanFull>> {
    let record = state.database.get_plan(id).await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(format!("/api/plans/{id}"))
    })?;
    Ok(Json(record.into()))
}
