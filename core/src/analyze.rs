use std::path::Path;

use tracing::info;

use crate::extract::read_activity;
use crate::locate::newest_file;
use crate::metrics::{avg_cadence, avg_heart_rate, avg_speed_kmh};
use crate::plot::render_plots;
use crate::report::write_report;
use crate::segment::summarize_by_km;
use crate::transform::derive_track;
use crate::types::{ActivitySummary, SegmentSummary, TrackPoint};
use crate::StrideError;

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub summary: ActivitySummary,
    pub segments: Vec<SegmentSummary>,
}

/// Run the full pipeline over the newest file in `dir`: decode, derive,
/// aggregate per km, render the plots and write the report.
pub fn analyze_latest(
    dir: &Path,
    plot_path: &Path,
    report_path: &Path,
) -> Result<Analysis, StrideError> {
    let file = newest_file(dir)?;
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    info!("processing latest file: {}", name);

    let samples = read_activity(&file)?;
    info!("decoded {} record messages", samples.len());

    let points = derive_track(&samples);
    let segments = summarize_by_km(&points);
    info!("aggregated {} km segments", segments.len());

    let summary = activity_summary(name, &points);

    render_plots(plot_path, &points, &segments)?;
    info!("wrote {}", plot_path.display());

    // The report embeds the image by file name, both land in the same
    // directory.
    let plot_file = plot_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    write_report(report_path, &summary, &segments, plot_file)?;
    info!("wrote {}", report_path.display());

    Ok(Analysis { summary, segments })
}

fn activity_summary(source_file: String, points: &[TrackPoint]) -> ActivitySummary {
    let first_ts = points.iter().find_map(|p| p.timestamp);
    let last_ts = points.iter().rev().find_map(|p| p.timestamp);
    let duration_min = match (first_ts, last_ts) {
        (Some(first), Some(last)) => {
            Some((last - first).num_milliseconds() as f64 / 60_000.0)
        }
        _ => None,
    };

    ActivitySummary {
        source_file,
        total_distance_km: points.iter().map(|p| p.distance_km).fold(0.0, f64::max),
        duration_min,
        avg_heart_rate: avg_heart_rate(points),
        avg_cadence: avg_cadence(points),
        avg_speed_kmh: avg_speed_kmh(points).unwrap_or(0.0),
    }
}
