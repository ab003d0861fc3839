//! Component F: the day-sheet builder (§4.7). Slices the global timeline
//! into per-calendar-day sheets, prorates mileage, and merges adjacent
//! segments that share a duty status.

use chrono::{Duration, NaiveDate};
use model::{DaySheet, DutyStatus, Segment, TimelineEvent};

use crate::constants::MINUTES_IN_DAY;

pub(crate) fn build_daily_sheets(timeline: &[TimelineEvent], start_date: NaiveDate) -> Vec<DaySheet> {
    let Some(last) = timeline.last() else {
        return Vec::new();
    };

    let total_minutes = last.end;
    let num_days = ((total_minutes as f64) / (MINUTES_IN_DAY as f64)).ceil() as i64;

    let mut sheets = Vec::with_capacity(num_days.max(0) as usize);

    for day_idx in 0..num_days {
        let day_start = day_idx * MINUTES_IN_DAY;
        let day_end = day_start + MINUTES_IN_DAY;
        let current_date = start_date + Duration::days(day_idx);

        let mut segments = Vec::new();
        let mut day_miles = 0.0;

        for evt in timeline {
            if evt.end <= day_start || evt.start >= day_end {
                continue;
            }
            let seg_start = evt.start.max(day_start) - day_start;
            let seg_end = evt.end.min(day_end) - day_start;
            if seg_start >= seg_end {
                continue;
            }

            let evt_duration = evt.end - evt.start;
            if evt_duration > 0 && evt.miles > 0.0 {
                let fraction = (seg_end - seg_start) as f64 / evt_duration as f64;
                day_miles += evt.miles * fraction;
            }

            segments.push(Segment {
                start_minute: seg_start,
                end_minute: seg_end,
                status: evt.status,
                location_label: evt.label.clone(),
            });
        }

        let merged = merge_segments(segments);

        sheets.push(DaySheet {
            date: current_date,
            segments: merged,
            total_miles: (day_miles * 10.0).round() / 10.0,
        });
    }

    sheets
}

/// Merge consecutive segments sharing a status where `prev.end == next.start`,
/// keeping the later non-empty label.
fn merge_segments(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();
    for seg in segments {
        if let Some(last) = merged.last_mut() {
            if same_status(last.status, seg.status) && last.end_minute == seg.start_minute {
                last.end_minute = seg.end_minute;
                if !seg.location_label.is_empty() {
                    last.location_label = seg.location_label;
                }
                continue;
            }
        }
        merged.push(seg);
    }
    merged
}

fn same_status(a: DutyStatus, b: DutyStatus) -> bool {
    a == b
}
