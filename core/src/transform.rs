use crate::types::{Sample, TrackPoint};

const MS_TO_KMH: f64 = 3.6;

/// Derive the per-point analysis fields for every sample.
pub fn derive_track(samples: &[Sample]) -> Vec<TrackPoint> {
    samples.iter().map(derive_point).collect()
}

/// Missing distance and speed fall back to zero; heart rate and cadence
/// stay absent when the device sent nothing.
fn derive_point(sample: &Sample) -> TrackPoint {
    let distance_km = sample.distance_m.unwrap_or(0.0) / 1000.0;
    // enhanced_speed wins over speed when both are present
    let speed_ms = sample.enhanced_speed_ms.or(sample.speed_ms).unwrap_or(0.0);

    TrackPoint {
        timestamp: sample.timestamp,
        distance_km,
        km_segment: distance_km as u32,
        speed_kmh: speed_ms * MS_TO_KMH,
        heart_rate: sample.heart_rate,
        cadence_raw: sample.cadence,
        // Apple Watch-style devices report strides/min; double for steps/min
        cadence_real: sample.cadence.map(|c| c * 2.0),
    }
}
