use crate::types::TrackPoint;

/// Arithmetic mean over the values that are present.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for v in values {
        sum += v;
        cnt += 1;
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

/// EF = speed (km/h) per heart beat (bpm).
///
/// A zero heart rate is not guarded; the non-finite result flows into
/// the report as-is.
pub fn efficiency_factor(speed_kmh: f64, heart_rate: f64) -> f64 {
    speed_kmh / heart_rate
}

/// Pace (min/km) from speed (km/h). Zero speed yields +inf.
pub fn pace_min_per_km(speed_kmh: f64) -> f64 {
    60.0 / speed_kmh
}

pub fn avg_heart_rate(points: &[TrackPoint]) -> Option<f64> {
    mean(points.iter().filter_map(|p| p.heart_rate))
}

/// Mean corrected cadence; falls back to the raw series when no point
/// carries a corrected value.
pub fn avg_cadence(points: &[TrackPoint]) -> Option<f64> {
    mean(points.iter().filter_map(|p| p.cadence_real))
        .or_else(|| mean(points.iter().filter_map(|p| p.cadence_raw)))
}

pub fn avg_speed_kmh(points: &[TrackPoint]) -> Option<f64> {
    mean(points.iter().map(|p| p.speed_kmh))
}
