use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stridegraph_core::analyze_latest;

const ACTIVITY_DIR: &str = "healthfit";
const PLOT_FILE: &str = "analysis_plots.png";
const REPORT_FILE: &str = "analysis_report.md";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let analysis = analyze_latest(
        Path::new(ACTIVITY_DIR),
        Path::new(PLOT_FILE),
        Path::new(REPORT_FILE),
    )
    .context("activity analysis failed")?;

    info!(
        "analysis complete: {:.2} km across {} segments",
        analysis.summary.total_distance_km,
        analysis.segments.len()
    );
    Ok(())
}
