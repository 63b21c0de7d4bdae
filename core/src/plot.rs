use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::types::{SegmentSummary, TrackPoint};
use crate::StrideError;

const PLOT_SIZE: (u32, u32) = (1200, 1400); // px, three stacked charts
const CADENCE_COLOR: RGBColor = RGBColor(255, 140, 0);

/// Render the three stacked charts (heart rate, cadence, EF) to a PNG.
pub fn render_plots(
    path: &Path,
    points: &[TrackPoint],
    segments: &[SegmentSummary],
) -> Result<(), StrideError> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    draw_charts(&root, points, segments).map_err(|e| StrideError::Plot(e.to_string()))
}

fn draw_charts(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    points: &[TrackPoint],
    segments: &[SegmentSummary],
) -> Result<(), Box<dyn std::error::Error>> {
    root.fill(&WHITE)?;
    let areas = root.split_evenly((3, 1));

    let hr_series: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| p.heart_rate.map(|hr| (p.distance_km, hr)))
        .collect();
    draw_series_chart(
        &areas[0],
        "Heart Rate vs Distance",
        "km",
        "BPM",
        &hr_series,
        &RED,
        false,
    )?;

    let use_raw = points.iter().all(|p| p.cadence_real.is_none());
    let cadence_series: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| {
            let cadence = if use_raw { p.cadence_raw } else { p.cadence_real };
            cadence.map(|c| (p.distance_km, c))
        })
        .collect();
    let cadence_title = if use_raw {
        "Cadence vs Distance"
    } else {
        "Cadence (x2) vs Distance"
    };
    draw_series_chart(
        &areas[1],
        cadence_title,
        "km",
        "SPM",
        &cadence_series,
        &CADENCE_COLOR,
        false,
    )?;

    // Non-finite EF (zero mean heart rate) belongs in the table, not the
    // axis range.
    let ef_series: Vec<(f64, f64)> = segments
        .iter()
        .filter_map(|s| {
            s.ef
                .filter(|ef| ef.is_finite())
                .map(|ef| (f64::from(s.km_segment), ef))
        })
        .collect();
    draw_series_chart(
        &areas[2],
        "Efficiency Factor (EF) per KM",
        "KM Segment",
        "EF",
        &ef_series,
        &BLUE,
        true,
    )?;

    root.present()?;
    Ok(())
}

fn draw_series_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    series: &[(f64, f64)],
    color: &RGBColor,
    markers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (x_max, y_min, y_max) = series_bounds(series);

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc(x_desc).y_desc(y_desc).draw()?;

    chart.draw_series(LineSeries::new(series.iter().copied(), color))?;
    if markers {
        chart.draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }
    Ok(())
}

/// Axis bounds from the data; an empty series still gets a drawable
/// (0..1) grid.
fn series_bounds(series: &[(f64, f64)]) -> (f64, f64, f64) {
    let x_max = series.iter().map(|&(x, _)| x).fold(1.0, f64::max);
    let mut y_min = series.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let mut y_max = series
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);

    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_min == y_max {
        y_min -= 1.0;
        y_max += 1.0;
    }
    (x_max, y_min, y_max)
}
