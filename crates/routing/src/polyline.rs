//! Post-engine polyline interpolation (§6.3): assigns lat/lng to stops whose
//! coordinates are still (0, 0) by walking the route polyline proportionally
//! to driving minutes elapsed before the stop.

use model::{DutyStatus, StopEvent, TimelineEvent};

/// Mutates `stops` in place, filling in coordinates for every stop that
/// doesn't already have them. `encoded_polyline` is the provider's geometry
/// string; `total_drive_minutes` is the trip's requested driving duration.
pub fn interpolate_stop_positions(
    stops: &mut [StopEvent],
    timeline: &[TimelineEvent],
    encoded_polyline: &str,
    total_drive_minutes: i64,
) {
    if encoded_polyline.is_empty() || total_drive_minutes <= 0 {
        return;
    }

    let Ok(line) = polyline::decode_polyline(encoded_polyline, 5) else {
        return;
    };
    let decoded: Vec<(f64, f64)> = line.points().map(|p| (p.y(), p.x())).collect();
    if decoded.len() < 2 {
        return;
    }

    let mut seg_lengths = Vec::with_capacity(decoded.len() - 1);
    let mut total_length = 0.0;
    for window in decoded.windows(2) {
        let (lat0, lng0) = window[0];
        let (lat1, lng1) = window[1];
        let d = ((lat1 - lat0).powi(2) + (lng1 - lng0).powi(2)).sqrt();
        seg_lengths.push(d);
        total_length += d;
    }
    if total_length <= 0.0 {
        return;
    }

    for stop in stops.iter_mut() {
        if stop.has_coords() {
            continue;
        }

        let mut driving_before = 0i64;
        for evt in timeline {
            if evt.start >= stop.global_minute {
                break;
            }
            if evt.status == DutyStatus::Driving {
                let end = evt.end.min(stop.global_minute);
                driving_before += end - evt.start;
            }
        }

        let fraction = (driving_before as f64 / total_drive_minutes as f64).min(1.0);
        let target_dist = fraction * total_length;

        let mut cumulative = 0.0;
        let mut placed = false;
        for (i, seg_len) in seg_lengths.iter().enumerate() {
            if cumulative + seg_len >= target_dist {
                let remaining = target_dist - cumulative;
                let ratio = if *seg_len > 0.0 { remaining / seg_len } else { 0.0 };
                let (lat0, lng0) = decoded[i];
                let (lat1, lng1) = decoded[i + 1];
                let lat = lat0 + ratio * (lat1 - lat0);
                let lng = lng0 + ratio * (lng1 - lng0);
                stop.lat = utility::rounding::round_to(lat, 6);
                stop.lng = utility::rounding::round_to(lng, 6);
                placed = true;
                break;
            }
            cumulative += seg_len;
        }
        if !placed {
            let (lat, lng) = *decoded.last().unwrap();
            stop.lat = lat;
            stop.lng = lng;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::StopKind;

    #[test]
    fn stop_already_placed_at_pickup_is_left_untouched() {
        let mut stops = vec![StopEvent::new(StopKind::Pickup, 100, 60, "Pickup").with_coords(10.0, 20.0)];
        let timeline = vec![TimelineEvent::new(0, 100, DutyStatus::Driving, "leg").with_miles(50.0)];
        let encoded = polyline::encode_coordinates(
            vec![geo_types::Coord { x: 0.0, y: 0.0 }, geo_types::Coord { x: 1.0, y: 1.0 }].into_iter(),
            5,
        )
        .unwrap();
        interpolate_stop_positions(&mut stops, &timeline, &encoded, 100);
        assert_eq!(stops[0].lat, 10.0);
        assert_eq!(stops[0].lng, 20.0);
    }

    #[test]
    fn stop_without_coords_is_placed_along_the_route() {
        let mut stops = vec![StopEvent::new(StopKind::Fuel, 50, 30, "Fuel")];
        let timeline = vec![TimelineEvent::new(0, 100, DutyStatus::Driving, "leg").with_miles(50.0)];
        let encoded = polyline::encode_coordinates(
            vec![geo_types::Coord { x: 0.0, y: 0.0 }, geo_types::Coord { x: 1.0, y: 1.0 }].into_iter(),
            5,
        )
        .unwrap();
        interpolate_stop_positions(&mut stops, &timeline, &encoded, 100);
        assert!(stops[0].has_coords());
        assert!(stops[0].lat > 0.0 && stops[0].lat < 1.0);
    }
}
