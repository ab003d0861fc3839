//! Component C: the leg driver — the engine's core loop (§4.4). Drives one
//! leg (current→pickup or pickup→dropoff) to completion, inserting breaks,
//! resets, and fuel stops in the fixed priority order the rules demand.

use model::{DutyStatus, TimelineEvent};

use crate::constants::{
    AVG_SPEED_MPH, BREAK_TRIGGER, CYCLE_LIMIT, DRIVE_LIMIT, FUEL_INTERVAL_MILES, WINDOW_LIMIT,
};
use crate::state::DriverState;
use crate::stops::{insert_break, insert_fuel_stop, insert_reset};

/// Drive `miles` over `minutes`, advancing `state` until the leg is
/// exhausted or the 70/8 cycle runs out first.
pub(crate) fn drive_leg(state: &mut DriverState, miles: f64, minutes: i64, label: &str) {
    let mut remaining_miles = miles;
    let mut remaining_minutes = minutes;

    while remaining_minutes > 0 {
        let cycle_remaining = (CYCLE_LIMIT as f64 - state.cycle_minutes).max(0.0);
        if cycle_remaining <= 0.0 {
            break;
        }

        let window_remaining = (WINDOW_LIMIT - state.on_duty_minutes).max(0);
        let drive_remaining = (DRIVE_LIMIT - state.drive_minutes).max(0);

        if window_remaining <= 0 || drive_remaining <= 0 {
            insert_reset(state);
            continue;
        }

        if state.cumulative_drive >= BREAK_TRIGGER {
            insert_break(state, label);
            continue;
        }

        if state.miles_since_fuel >= FUEL_INTERVAL_MILES {
            insert_fuel_stop(state, label);
            continue;
        }

        let mut max_drive = remaining_minutes
            .min(drive_remaining)
            .min(window_remaining)
            .min(cycle_remaining as i64)
            .min(BREAK_TRIGGER - state.cumulative_drive);

        let speed = if remaining_minutes > 0 {
            remaining_miles / remaining_minutes as f64 * 60.0
        } else {
            AVG_SPEED_MPH
        };
        let miles_until_fuel = FUEL_INTERVAL_MILES - state.miles_since_fuel;
        let minutes_until_fuel = if speed > 0.0 {
            (miles_until_fuel / speed.max(1.0) * 60.0) as i64
        } else {
            max_drive
        };
        max_drive = max_drive.min(minutes_until_fuel.max(1));

        if max_drive <= 0 {
            max_drive = 1;
        }

        let chunk_miles = (max_drive as f64 / remaining_minutes.max(1) as f64) * remaining_miles;
        state.timeline.push(
            TimelineEvent::new(
                state.global_minute,
                state.global_minute + max_drive,
                DutyStatus::Driving,
                label,
            )
            .with_miles(chunk_miles),
        );
        state.global_minute += max_drive;
        state.drive_minutes += max_drive;
        state.on_duty_minutes += max_drive;
        state.cumulative_drive += max_drive;
        state.cycle_minutes += max_drive as f64;
        state.miles_since_fuel += chunk_miles;

        remaining_minutes -= max_drive;
        remaining_miles -= chunk_miles;
    }
}
