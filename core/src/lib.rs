//! StrideGraph core: run-activity analysis over FIT files.
//!
//! The pipeline is linear: locate the newest activity file, decode its
//! record messages, derive per-sample fields, aggregate per completed
//! kilometer, then render plots and a markdown report.

use std::path::PathBuf;

use thiserror::Error;

pub mod analyze;
pub mod extract;
pub mod locate;
pub mod metrics;
pub mod plot;
pub mod report;
pub mod segment;
pub mod transform;
pub mod types;

pub use analyze::{analyze_latest, Analysis};
pub use types::{ActivitySummary, Sample, SegmentSummary, TrackPoint};

#[derive(Error, Debug)]
pub enum StrideError {
    #[error("activity folder not found: {}", .0.display())]
    MissingActivityDir(PathBuf),
    #[error("no activity files in {}", .0.display())]
    NoActivityFiles(PathBuf),
    #[error("failed to parse FIT file: {0}")]
    FitParse(String),
    #[error("no record data in {}", .0.display())]
    NoRecords(PathBuf),
    #[error("failed to render plots: {0}")]
    Plot(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
