//! Component D: stop insertion — breaks, resets, fuel, and on-duty stops.
//! Each inserter appends matching `StopEvent`/`TimelineEvent` pairs and
//! advances the global clock (§4.5, §4.6).

use model::{Coordinates, DutyStatus, StopEvent, StopKind, TimelineEvent};

use crate::constants::{
    BREAK_DURATION, FUEL_DURATION, OFF_DUTY_RESET, WINDOW_LIMIT,
};
use crate::state::DriverState;

/// Insert a mandatory 30-minute break. Resets the cumulative-driving counter
/// but still counts toward the 14-hour window.
pub(crate) fn insert_break(state: &mut DriverState, label: &str) {
    state.stops.push(StopEvent::new(
        StopKind::Break30,
        state.global_minute,
        BREAK_DURATION,
        format!("30-min break — {label}"),
    ));
    state.timeline.push(TimelineEvent::new(
        state.global_minute,
        state.global_minute + BREAK_DURATION,
        DutyStatus::OffDuty,
        "30-min break",
    ));
    state.global_minute += BREAK_DURATION;
    state.on_duty_minutes += BREAK_DURATION;
    state.cumulative_drive = 0;
}

/// Insert a 10-hour off-duty reset and start a fresh duty period.
pub(crate) fn insert_reset(state: &mut DriverState) {
    state.stops.push(StopEvent::new(
        StopKind::OffDuty10,
        state.global_minute,
        OFF_DUTY_RESET,
        "10-hour off-duty reset",
    ));
    state.timeline.push(TimelineEvent::new(
        state.global_minute,
        state.global_minute + OFF_DUTY_RESET,
        DutyStatus::Sleeper,
        "10-hour sleeper berth reset",
    ));
    state.global_minute += OFF_DUTY_RESET;
    state.drive_minutes = 0;
    state.on_duty_minutes = 0;
    state.cumulative_drive = 0;
}

/// Insert a fuel stop (On Duty Not Driving) and reset the fuel-distance counter.
pub(crate) fn insert_fuel_stop(state: &mut DriverState, label: &str) {
    state.stops.push(StopEvent::new(
        StopKind::Fuel,
        state.global_minute,
        FUEL_DURATION,
        format!("Fuel stop — {label}"),
    ));
    state.timeline.push(TimelineEvent::new(
        state.global_minute,
        state.global_minute + FUEL_DURATION,
        DutyStatus::OnDutyNotDriving,
        "Fuel stop",
    ));
    state.global_minute += FUEL_DURATION;
    state.on_duty_minutes += FUEL_DURATION;
    state.cycle_minutes += FUEL_DURATION as f64;
    state.miles_since_fuel = 0.0;
}

/// Insert a pickup/dropoff On Duty Not Driving stop, forcing a reset first if
/// the remainder of the 14-hour window can't absorb it.
pub(crate) fn insert_on_duty_stop(
    state: &mut DriverState,
    duration: i64,
    kind: StopKind,
    label: &str,
    coords: Coordinates,
) {
    let window_remaining = WINDOW_LIMIT - state.on_duty_minutes;
    if window_remaining < duration {
        insert_reset(state);
    }

    state.stops.push(
        StopEvent::new(kind, state.global_minute, duration, label).with_coords(coords.lat, coords.lng),
    );
    state.timeline.push(TimelineEvent::new(
        state.global_minute,
        state.global_minute + duration,
        DutyStatus::OnDutyNotDriving,
        label,
    ));
    state.global_minute += duration;
    state.on_duty_minutes += duration;
    state.cycle_minutes += duration as f64;
}
