use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One decoded `record` message. Any field may be absent depending on
/// the device and export path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: Option<DateTime<Local>>,
    pub distance_m: Option<f64>,        // meter, kumulativ
    pub heart_rate: Option<f64>,        // bpm
    pub cadence: Option<f64>,           // strides/min as the device reports it
    pub speed_ms: Option<f64>,          // m/s
    pub enhanced_speed_ms: Option<f64>, // m/s
}

/// Sample with the derived analysis fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    pub timestamp: Option<DateTime<Local>>,
    pub distance_km: f64,
    pub km_segment: u32,              // completed kilometer bucket
    pub speed_kmh: f64,               // 0.0 when the device sent no speed
    pub heart_rate: Option<f64>,      // bpm
    pub cadence_raw: Option<f64>,     // strides/min
    pub cadence_real: Option<f64>,    // steps/min (x2 korreksjon)
}

/// Per-kilometer aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub km_segment: u32,
    pub heart_rate: Option<f64>,      // mean bpm
    pub speed_kmh: f64,               // mean
    pub cadence: Option<f64>,         // mean steps/min, raw fallback
    pub distance_km: f64,             // max within the segment
    pub ef: Option<f64>,              // speed_kmh / heart_rate
    pub pace_min_per_km: f64,         // 60 / speed_kmh
}

/// Whole-activity header data for the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub source_file: String,
    pub total_distance_km: f64,
    pub duration_min: Option<f64>,
    pub avg_heart_rate: Option<f64>,  // bpm
    pub avg_cadence: Option<f64>,     // steps/min
    pub avg_speed_kmh: f64,
}
