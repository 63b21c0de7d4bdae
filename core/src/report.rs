use std::fs;
use std::path::Path;

use crate::types::{ActivitySummary, SegmentSummary};
use crate::StrideError;

/// Render the markdown report and write it to `path`, overwriting any
/// previous run.
pub fn write_report(
    path: &Path,
    summary: &ActivitySummary,
    segments: &[SegmentSummary],
    plot_file: &str,
) -> Result<(), StrideError> {
    fs::write(path, render_report(summary, segments, plot_file))?;
    Ok(())
}

/// Report body: header stats, the per-km table, the embedded plot image.
pub fn render_report(
    summary: &ActivitySummary,
    segments: &[SegmentSummary],
    plot_file: &str,
) -> String {
    let mut out = String::new();

    out.push_str("# Run Analysis Report\n\n");
    out.push_str(&format!("**File**: {}\n\n", summary.source_file));
    out.push_str(&format!(
        "**Total distance**: {:.2} km\n",
        summary.total_distance_km
    ));
    out.push_str(&format!(
        "**Duration**: {} min\n",
        fmt_opt(summary.duration_min, 1)
    ));
    out.push_str(&format!(
        "**Avg heart rate**: {} bpm\n",
        fmt_opt(summary.avg_heart_rate, 1)
    ));
    out.push_str(&format!(
        "**Avg cadence**: {} spm\n",
        fmt_opt(summary.avg_cadence, 1)
    ));
    out.push_str(&format!(
        "**Avg speed**: {:.1} km/h\n\n",
        summary.avg_speed_kmh
    ));

    out.push_str("## Per KM Summary\n\n");
    out.push_str("| km | heart_rate | speed_kmh | cadence | distance_km | EF | pace_min_per_km |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for s in segments {
        out.push_str(&format!(
            "| {} | {} | {:.3} | {} | {:.3} | {} | {:.2} |\n",
            s.km_segment,
            fmt_opt(s.heart_rate, 3),
            s.speed_kmh,
            fmt_opt(s.cadence, 3),
            s.distance_km,
            fmt_opt(s.ef, 4),
            s.pace_min_per_km,
        ));
    }

    out.push_str(&format!("\n![Analysis plots]({plot_file})\n"));
    out
}

/// Absent metrics render as a dash; non-finite values keep the standard
/// float formatting (`inf`, `NaN`).
fn fmt_opt(value: Option<f64>, dp: usize) -> String {
    match value {
        Some(v) => format!("{v:.dp$}"),
        None => "-".to_string(),
    }
}
