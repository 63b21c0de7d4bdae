use std::collections::BTreeMap;

use crate::metrics::{efficiency_factor, mean, pace_min_per_km};
use crate::types::{SegmentSummary, TrackPoint};

/// Group track points by completed kilometer and summarize each group.
/// Groups come out in ascending km order.
pub fn summarize_by_km(points: &[TrackPoint]) -> Vec<SegmentSummary> {
    let mut groups: BTreeMap<u32, Vec<&TrackPoint>> = BTreeMap::new();
    for point in points {
        groups.entry(point.km_segment).or_default().push(point);
    }

    // Raw cadence only stands in when the corrected series is absent for
    // the whole activity, not per segment.
    let use_raw_cadence = points.iter().all(|p| p.cadence_real.is_none());

    groups
        .into_iter()
        .map(|(km, members)| summarize_segment(km, &members, use_raw_cadence))
        .collect()
}

fn summarize_segment(
    km_segment: u32,
    members: &[&TrackPoint],
    use_raw_cadence: bool,
) -> SegmentSummary {
    let heart_rate = mean(members.iter().filter_map(|p| p.heart_rate));
    let speed_kmh = mean(members.iter().map(|p| p.speed_kmh)).unwrap_or(0.0);
    let cadence = if use_raw_cadence {
        mean(members.iter().filter_map(|p| p.cadence_raw))
    } else {
        mean(members.iter().filter_map(|p| p.cadence_real))
    };
    let distance_km = members.iter().map(|p| p.distance_km).fold(0.0, f64::max);

    SegmentSummary {
        km_segment,
        heart_rate,
        speed_kmh,
        cadence,
        distance_km,
        ef: heart_rate.map(|hr| efficiency_factor(speed_kmh, hr)),
        pace_min_per_km: pace_min_per_km(speed_kmh),
    }
}
