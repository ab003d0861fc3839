//! Component E: the plan orchestrator (§4.3). Sequences leg 1 → pickup →
//! leg 2 → dropoff → tail-fill, then derives completion metrics.

use model::{DutyStatus, PlanRequest, PlanResult, StopKind, TimelineEvent};

use crate::constants::{DROPOFF_DURATION, FUEL_INTERVAL_MILES, MINUTES_IN_DAY, PICKUP_DURATION};
use crate::day_sheet::build_daily_sheets;
use crate::leg::drive_leg;
use crate::state::DriverState;
use crate::stops::insert_on_duty_stop;

const LEG1_FRACTION: f64 = 0.30;

pub fn compute_plan(request: &PlanRequest) -> PlanResult {
    let mut state = DriverState::new((request.cycle_used_hours * 60.0).round());

    let (leg1_miles, leg1_minutes) = match request.leg1 {
        Some(leg) => (leg.miles, leg.minutes),
        None => (
            request.total_miles * LEG1_FRACTION,
            (request.total_drive_minutes as f64 * LEG1_FRACTION) as i64,
        ),
    };
    let (leg2_miles, leg2_minutes) = match request.leg2 {
        Some(leg) => (leg.miles, leg.minutes),
        None => (
            request.total_miles - leg1_miles,
            request.total_drive_minutes - leg1_minutes,
        ),
    };

    drive_leg(&mut state, leg1_miles, leg1_minutes, "En route to pickup");

    insert_on_duty_stop(
        &mut state,
        PICKUP_DURATION,
        StopKind::Pickup,
        &request.pickup_label,
        request.pickup_coords,
    );

    drive_leg(&mut state, leg2_miles, leg2_minutes, "En route to dropoff");

    insert_on_duty_stop(
        &mut state,
        DROPOFF_DURATION,
        StopKind::Dropoff,
        &request.dropoff_label,
        request.dropoff_coords,
    );

    let day_minute = state.global_minute % MINUTES_IN_DAY;
    if day_minute > 0 {
        let remaining = MINUTES_IN_DAY - day_minute;
        state.timeline.push(TimelineEvent::new(
            state.global_minute,
            state.global_minute + remaining,
            DutyStatus::OffDuty,
            "Off Duty",
        ));
        state.global_minute += remaining;
    }

    let actual_driven: i64 = state
        .timeline
        .iter()
        .filter(|e| e.status == DutyStatus::Driving)
        .map(|e| e.duration())
        .sum();
    let remaining_drive = (request.total_drive_minutes - actual_driven).max(0);
    let trip_completed = remaining_drive == 0;

    let num_fuel_needed = (request.total_miles / FUEL_INTERVAL_MILES).floor().max(0.0) as u64;
    let actual_fuel_stops = state
        .stops
        .iter()
        .filter(|s| s.kind == StopKind::Fuel)
        .count() as u64;
    let planned_fuel_stops = num_fuel_needed.max(actual_fuel_stops);

    let daily_sheets = build_daily_sheets(&state.timeline, request.start_date);

    PlanResult {
        timeline: state.timeline,
        stops: state.stops,
        daily_sheets,
        trip_completed,
        remaining_drive_minutes: remaining_drive,
        planned_fuel_stops,
    }
}
