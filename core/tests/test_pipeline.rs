use std::path::Path;

use serde::Deserialize;

use stridegraph_core::analyze::analyze_latest;
use stridegraph_core::segment::summarize_by_km;
use stridegraph_core::transform::derive_track;
use stridegraph_core::types::Sample;

#[derive(Debug, Deserialize)]
struct FixtureRow {
    distance_m: Option<f64>,
    heart_rate: Option<f64>,
    cadence: Option<f64>,
    enhanced_speed_ms: Option<f64>,
}

fn fixture_samples() -> Vec<Sample> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/run_fixture.csv");
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize()
        .map(|row| {
            let row: FixtureRow = row.unwrap();
            Sample {
                distance_m: row.distance_m,
                heart_rate: row.heart_rate,
                cadence: row.cadence,
                enhanced_speed_ms: row.enhanced_speed_ms,
                ..Sample::default()
            }
        })
        .collect()
}

#[test]
fn golden_fixture_produces_two_hand_computed_segments() {
    let samples = fixture_samples();
    assert_eq!(samples.len(), 3);

    let points = derive_track(&samples);
    let segments = summarize_by_km(&points);
    assert_eq!(segments.len(), 2);

    // km 0: samples at 0 m and 900 m
    let km0 = &segments[0];
    assert_eq!(km0.km_segment, 0);
    assert!((km0.heart_rate.unwrap() - 130.0).abs() < 1e-9);
    assert!((km0.speed_kmh - (2.5 * 3.6 + 3.0 * 3.6) / 2.0).abs() < 1e-9);
    assert!((km0.cadence.unwrap() - 165.0).abs() < 1e-9);
    assert!((km0.distance_km - 0.9).abs() < 1e-12);
    let km0_speed = (2.5 * 3.6 + 3.0 * 3.6) / 2.0;
    assert!((km0.ef.unwrap() - km0_speed / 130.0).abs() < 1e-9);
    assert!((km0.pace_min_per_km - 60.0 / km0_speed).abs() < 1e-9);

    // km 1: the sample at 1200 m
    let km1 = &segments[1];
    assert_eq!(km1.km_segment, 1);
    assert!((km1.heart_rate.unwrap() - 150.0).abs() < 1e-9);
    assert!((km1.speed_kmh - 2.75 * 3.6).abs() < 1e-9);
    assert!((km1.cadence.unwrap() - 180.0).abs() < 1e-9);
    assert!((km1.distance_km - 1.2).abs() < 1e-12);
}

#[test]
fn missing_activity_dir_produces_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("healthfit");
    let plot = dir.path().join("analysis_plots.png");
    let report = dir.path().join("analysis_report.md");

    assert!(analyze_latest(&missing, &plot, &report).is_err());
    assert!(!plot.exists());
    assert!(!report.exists());
}

#[test]
fn empty_activity_dir_produces_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let activities = dir.path().join("healthfit");
    std::fs::create_dir(&activities).unwrap();
    let plot = dir.path().join("analysis_plots.png");
    let report = dir.path().join("analysis_report.md");

    assert!(analyze_latest(&activities, &plot, &report).is_err());
    assert!(!plot.exists());
    assert!(!report.exists());
}

#[test]
fn garbage_bytes_fail_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    let activities = dir.path().join("healthfit");
    std::fs::create_dir(&activities).unwrap();
    std::fs::write(activities.join("not_a_fit_file"), b"plain text, no FIT header").unwrap();
    let plot = dir.path().join("analysis_plots.png");
    let report = dir.path().join("analysis_report.md");

    assert!(analyze_latest(&activities, &plot, &report).is_err());
    assert!(!plot.exists());
    assert!(!report.exists());
}
