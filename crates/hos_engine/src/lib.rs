//! The Hours-of-Service planning engine: a deterministic, single-pass
//! simulator that turns a trip's total distance/drive-time into a compliant
//! timeline of duty-status blocks, discrete stops, and per-day log sheets.
//!
//! No I/O, no clock reads, no randomness — `compute_plan` is a pure
//! function of its `PlanRequest`.

mod constants;
mod day_sheet;
mod leg;
mod orchestrator;
mod state;
mod stops;

pub use constants::*;
pub use orchestrator::compute_plan;

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use model::{Coordinates, DutyStatus, PlanRequest, PlanResult, StopKind};

    use super::compute_plan;

    fn base_request(total_miles: f64, total_drive_minutes: i64, cycle_used_hours: f64) -> PlanRequest {
        PlanRequest {
            total_miles,
            total_drive_minutes,
            cycle_used_hours,
            pickup_label: "Pickup".into(),
            dropoff_label: "Dropoff".into(),
            pickup_coords: Coordinates::new(0.0, 0.0),
            dropoff_coords: Coordinates::new(0.0, 0.0),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            leg1: None,
            leg2: None,
        }
    }

    fn total_driving_minutes(result: &PlanResult) -> i64 {
        result
            .timeline
            .iter()
            .filter(|e| e.status == DutyStatus::Driving)
            .map(|e| e.duration())
            .sum()
    }

    fn assert_timeline_contiguous(result: &PlanResult) {
        assert_eq!(result.timeline[0].start, 0);
        for pair in result.timeline.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    fn assert_day_sheets_total_1440(result: &PlanResult) {
        for sheet in &result.daily_sheets {
            let total: i64 = sheet.segments.iter().map(|s| s.duration()).sum();
            assert_eq!(total, 1440, "day sheet {} did not sum to 1440", sheet.date);
        }
    }

    fn assert_drive_limit_per_period(result: &PlanResult) {
        let mut period_drive = 0i64;
        for evt in &result.timeline {
            match evt.status {
                DutyStatus::Sleeper => period_drive = 0,
                DutyStatus::Driving => {
                    period_drive += evt.duration();
                    assert!(period_drive <= 661, "duty period drove {period_drive} minutes");
                }
                _ => {}
            }
        }
    }

    /// Cumulative driving since the last qualifying break must never exceed
    /// 480 minutes — only a 30-min off-duty break or a 600-min sleeper reset
    /// clears the counter.
    fn assert_break_trigger_honored(result: &PlanResult) {
        let mut since_break = 0i64;
        for evt in &result.timeline {
            match evt.status {
                DutyStatus::Driving => {
                    since_break += evt.duration();
                    assert!(since_break <= 480, "drove {since_break} minutes without a qualifying break");
                }
                DutyStatus::OffDuty if evt.duration() >= 30 => since_break = 0,
                DutyStatus::Sleeper if evt.duration() >= 600 => since_break = 0,
                _ => {}
            }
        }
    }

    #[test]
    fn t1_timeline_is_contiguous_from_zero() {
        let result = compute_plan(&base_request(550.0, 540, 0.0));
        assert_timeline_contiguous(&result);
    }

    #[test]
    fn t2_every_stop_is_covered_by_a_matching_timeline_event() {
        let result = compute_plan(&base_request(800.0, 780, 0.0));
        for stop in &result.stops {
            let covering = result
                .timeline
                .iter()
                .find(|e| e.start == stop.global_minute && e.end == stop.global_minute + stop.duration)
                .unwrap_or_else(|| panic!("no covering timeline event for stop at {}", stop.global_minute));
            assert_eq!(covering.status, stop.kind.covering_status());
        }
    }

    #[test]
    fn t3_driving_minutes_per_duty_period_stay_within_limit() {
        let result = compute_plan(&base_request(2504.0, 3489, 0.0));
        assert_drive_limit_per_period(&result);
    }

    #[test]
    fn t4_a_break_or_reset_intervenes_before_480_minutes_of_driving() {
        let result = compute_plan(&base_request(2504.0, 3489, 0.0));
        assert_break_trigger_honored(&result);
    }

    #[test]
    fn t5_total_driving_never_exceeds_requested_minutes() {
        let result = compute_plan(&base_request(1793.0, 2512, 69.0));
        assert!(total_driving_minutes(&result) <= 2512);
    }

    #[test]
    fn t6_total_attributed_miles_do_not_exceed_requested_distance() {
        let result = compute_plan(&base_request(1500.0, 1320, 0.0));
        let total_miles: f64 = result
            .timeline
            .iter()
            .filter(|e| e.status == DutyStatus::Driving)
            .map(|e| e.miles)
            .sum();
        assert!(total_miles <= 1501.0, "attributed {total_miles} miles");
    }

    #[test]
    fn t7_every_day_sheet_sums_to_a_full_day() {
        let result = compute_plan(&base_request(2504.0, 3489, 0.0));
        assert_day_sheets_total_1440(&result);
    }

    #[test]
    fn t8_planned_fuel_stops_covers_both_floor_and_actual() {
        let result = compute_plan(&base_request(1500.0, 1320, 0.0));
        assert!(result.planned_fuel_stops >= 1);
        let actual_fuel = result.stops.iter().filter(|s| s.kind == StopKind::Fuel).count() as u64;
        assert!(result.planned_fuel_stops >= actual_fuel);
    }

    #[test]
    fn t9_remaining_drive_minutes_matches_the_shortfall() {
        let result = compute_plan(&base_request(1793.0, 2512, 69.0));
        let driven = total_driving_minutes(&result);
        assert_eq!(result.remaining_drive_minutes, (2512 - driven).max(0));
    }

    #[test]
    fn t10_identical_inputs_produce_structurally_equal_output() {
        let a = compute_plan(&base_request(2504.0, 3489, 0.0));
        let b = compute_plan(&base_request(2504.0, 3489, 0.0));
        assert_eq!(a.timeline, b.timeline);
        assert_eq!(a.stops, b.stops);
        assert_eq!(a.daily_sheets, b.daily_sheets);
        assert_eq!(a.trip_completed, b.trip_completed);
        assert_eq!(a.remaining_drive_minutes, b.remaining_drive_minutes);
        assert_eq!(a.planned_fuel_stops, b.planned_fuel_stops);
    }

    #[test]
    fn scenario_1_short_trip_needs_no_extra_stops() {
        let result = compute_plan(&base_request(150.0, 180, 0.0));
        let kinds: Vec<_> = result.stops.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&StopKind::Pickup));
        assert!(kinds.contains(&StopKind::Dropoff));
        assert!(!kinds.contains(&StopKind::Fuel));
        assert!(!kinds.contains(&StopKind::Break30));
        assert!(!kinds.contains(&StopKind::OffDuty10));
        assert!(result.trip_completed);
        assert_eq!(result.remaining_drive_minutes, 0);
        assert_day_sheets_total_1440(&result);
    }

    #[test]
    fn scenario_2_break_needed_for_a_550_mile_trip() {
        let result = compute_plan(&base_request(550.0, 540, 0.0));
        assert!(result
            .stops
            .iter()
            .any(|s| s.kind == StopKind::Break30 && s.duration == 30));
    }

    #[test]
    fn scenario_3_reset_needed_for_an_800_mile_trip() {
        let result = compute_plan(&base_request(800.0, 780, 0.0));
        assert!(result
            .stops
            .iter()
            .any(|s| s.kind == StopKind::OffDuty10 && s.duration == 600));
        assert_drive_limit_per_period(&result);
    }

    #[test]
    fn scenario_4_drive_time_is_capped_when_the_cycle_is_nearly_exhausted() {
        let result = compute_plan(&base_request(400.0, 480, 65.0));
        assert!(total_driving_minutes(&result) <= 330);
    }

    #[test]
    fn scenario_5_fuel_stop_on_a_long_trip() {
        let result = compute_plan(&base_request(1500.0, 1320, 0.0));
        assert!(result
            .stops
            .iter()
            .any(|s| s.kind == StopKind::Fuel && s.duration == 30));
    }

    #[test]
    fn scenario_6_long_haul_multi_day_trip_covers_every_regulatory_mechanism() {
        let result = compute_plan(&base_request(2504.0, 3489, 0.0));
        assert!(result.daily_sheets.len() >= 5);
        let fuel_count = result.stops.iter().filter(|s| s.kind == StopKind::Fuel).count();
        let break_count = result.stops.iter().filter(|s| s.kind == StopKind::Break30).count();
        let reset_count = result.stops.iter().filter(|s| s.kind == StopKind::OffDuty10).count();
        assert!(fuel_count >= 2, "expected >=2 fuel stops, got {fuel_count}");
        assert!(break_count >= 4, "expected >=4 breaks, got {break_count}");
        assert!(reset_count >= 4, "expected >=4 resets, got {reset_count}");
        let kinds: Vec<_> = result.stops.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&StopKind::Pickup));
        assert!(kinds.contains(&StopKind::Dropoff));
        assert_drive_limit_per_period(&result);
        assert_day_sheets_total_1440(&result);
    }

    #[test]
    fn scenario_7_trip_reports_incomplete_when_the_cycle_runs_out() {
        let result = compute_plan(&base_request(1793.0, 2512, 69.0));
        assert!(!result.trip_completed);
        let driven = total_driving_minutes(&result);
        assert_eq!(result.remaining_drive_minutes, 2512 - driven);
        assert!(result.planned_fuel_stops >= 1);
    }
}
