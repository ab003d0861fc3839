use sqlx::{Executor, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{convert_error, Result};
use crate::rows::{DailySheetRow, NewTripPlan, SegmentRow, StopRow, TripPlanRecord, TripPlanRow};

/// Insert a freshly computed plan and all of its children, returning the
/// generated id. Always runs inside a transaction (see
/// [`crate::PgDatabase::insert_plan`]) so a failure midway leaves nothing behind.
pub async fn insert_trip_plan(tx: &mut Transaction<'_, Postgres>, plan: &NewTripPlan) -> Result<Uuid> {
    let id = Uuid::new_v4();
    let request = &plan.request;

    sqlx::query(
        "
        INSERT INTO trip_plans (
            id, current_location, pickup_location, dropoff_location,
            cycle_used_hours, routing_provider, total_miles, total_drive_minutes,
            route_polyline,
            current_location_lat, current_location_lng,
            pickup_location_lat, pickup_location_lng,
            dropoff_location_lat, dropoff_location_lng,
            trip_completed, remaining_drive_minutes, planned_fuel_stops
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18
        );
        ",
    )
    .bind(id)
    .bind(&plan.current_location)
    .bind(&request.pickup_label)
    .bind(&request.dropoff_label)
    .bind(request.cycle_used_hours)
    .bind(&plan.routing_provider)
    .bind(request.total_miles)
    .bind(request.total_drive_minutes)
    .bind(&plan.route_polyline)
    .bind(plan.current_coords.lat)
    .bind(plan.current_coords.lng)
    .bind(request.pickup_coords.lat)
    .bind(request.pickup_coords.lng)
    .bind(request.dropoff_coords.lat)
    .bind(request.dropoff_coords.lng)
    .bind(plan.result.trip_completed)
    .bind(plan.result.remaining_drive_minutes)
    .bind(plan.result.planned_fuel_stops as i64)
    .execute(&mut **tx)
    .await
    .map_err(convert_error)?;

    for stop in &plan.result.stops {
        sqlx::query(
            "
            INSERT INTO stops (id, trip_plan_id, kind, lat, lng, label, start_minute_global, duration_minutes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8);
            ",
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(stop.kind.as_str())
        .bind(stop.lat)
        .bind(stop.lng)
        .bind(&stop.label)
        .bind(stop.global_minute)
        .bind(stop.duration)
        .execute(&mut **tx)
        .await
        .map_err(convert_error)?;
    }

    for sheet in &plan.result.daily_sheets {
        let sheet_id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO daily_sheets (id, trip_plan_id, date, total_miles_today) VALUES ($1, $2, $3, $4);",
        )
        .bind(sheet_id)
        .bind(id)
        .bind(sheet.date)
        .bind(sheet.total_miles)
        .execute(&mut **tx)
        .await
        .map_err(convert_error)?;

        for segment in &sheet.segments {
            sqlx::query(
                "
                INSERT INTO segments (id, daily_sheet_id, start_minute, end_minute, status, location_label)
                VALUES ($1, $2, $3, $4, $5, $6);
                ",
            )
            .bind(Uuid::new_v4())
            .bind(sheet_id)
            .bind(segment.start_minute)
            .bind(segment.end_minute)
            .bind(segment.status.as_str())
            .bind(&segment.location_label)
            .execute(&mut **tx)
            .await
            .map_err(convert_error)?;
        }
    }

    Ok(id)
}

/// `GET /plans` summary rows: just the header fields, most recent first.
pub async fn list_trip_plans<'c, E>(executor: E) -> Result<Vec<TripPlanRow>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as::<_, TripPlanRow>(
        "SELECT * FROM trip_plans ORDER BY created_at DESC;",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)
}

/// `GET /plans/<uuid>` full record: the trip plan plus every stop, day sheet,
/// and segment that belongs to it.
pub async fn get_trip_plan(pool: &sqlx::PgPool, id: Uuid) -> Result<TripPlanRecord> {
    let trip = sqlx::query_as::<_, TripPlanRow>("SELECT * FROM trip_plans WHERE id = $1;")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(convert_error)?
        .ok_or(crate::error::DatabaseError::NotFound)?;

    let stops = sqlx::query_as::<_, StopRow>(
        "SELECT * FROM stops WHERE trip_plan_id = $1 ORDER BY start_minute_global;",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(convert_error)?;

    let sheets = sqlx::query_as::<_, DailySheetRow>(
        "SELECT * FROM daily_sheets WHERE trip_plan_id = $1 ORDER BY date;",
    )
    .bind(id)
    .fetch_all(pool)
    .await
    .map_err(convert_error)?;

    let mut sheets_with_segments = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let segments = sqlx::query_as::<_, SegmentRow>(
            "SELECT * FROM segments WHERE daily_sheet_id = $1 ORDER BY start_minute;",
        )
        .bind(sheet.id)
        .fetch_all(pool)
        .await
        .map_err(convert_error)?;
        sheets_with_segments.push((sheet, segments));
    }

    Ok(TripPlanRecord::assemble(trip, stops, sheets_with_segments))
}
