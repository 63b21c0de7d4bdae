use std::fs;
use std::path::Path;

use fitparser::de::from_bytes;
use fitparser::profile::MesgNum;
use fitparser::Value;

use crate::types::Sample;
use crate::StrideError;

/// Decode the `record` messages of a FIT activity file into samples.
///
/// Fields the analysis does not use are dropped here; everything else
/// keeps the raw value and unit the decoder emitted.
pub fn read_activity(path: &Path) -> Result<Vec<Sample>, StrideError> {
    let bytes = fs::read(path)?;
    let records = from_bytes(&bytes).map_err(|e| StrideError::FitParse(e.to_string()))?;

    let mut samples = Vec::new();
    for record in records {
        if record.kind() != MesgNum::Record {
            continue;
        }
        let mut sample = Sample::default();
        for field in record.fields() {
            match field.name() {
                "timestamp" => {
                    if let Value::Timestamp(ts) = field.value() {
                        sample.timestamp = Some(*ts);
                    }
                }
                "distance" => {
                    if let Some(val) = fit_value_to_f64(field.value()) {
                        sample.distance_m = Some(val);
                    }
                }
                "heart_rate" => {
                    if let Some(val) = fit_value_to_f64(field.value()) {
                        sample.heart_rate = Some(val);
                    }
                }
                "cadence" => {
                    if let Some(val) = fit_value_to_f64(field.value()) {
                        sample.cadence = Some(val);
                    }
                }
                "speed" => {
                    if let Some(val) = fit_value_to_f64(field.value()) {
                        sample.speed_ms = Some(val);
                    }
                }
                "enhanced_speed" => {
                    if let Some(val) = fit_value_to_f64(field.value()) {
                        sample.enhanced_speed_ms = Some(val);
                    }
                }
                _ => {}
            }
        }
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(StrideError::NoRecords(path.to_path_buf()));
    }
    Ok(samples)
}

fn fit_value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Float32(v) => Some(f64::from(*v)),
        Value::Float64(v) => Some(*v),
        Value::SInt8(v) => Some(f64::from(*v)),
        Value::UInt8(v) => Some(f64::from(*v)),
        Value::UInt8z(v) => Some(f64::from(*v)),
        Value::SInt16(v) => Some(f64::from(*v)),
        Value::UInt16(v) => Some(f64::from(*v)),
        Value::UInt16z(v) => Some(f64::from(*v)),
        Value::SInt32(v) => Some(f64::from(*v)),
        Value::UInt32(v) => Some(f64::from(*v)),
        Value::UInt32z(v) => Some(f64::from(*v)),
        Value::SInt64(v) => Some(*v as f64),
        Value::UInt64(v) => Some(*v as f64),
        Value::UInt64z(v) => Some(*v as f64),
        Value::Byte(v) => Some(f64::from(*v)),
        Value::Array(values) => values.iter().find_map(fit_value_to_f64),
        _ => None,
    }
}
