use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::StrideError;

/// Pick the most recently modified regular file in `dir`.
///
/// Exported activity files often carry no extension, so every regular
/// file is a candidate. Ties on the timestamp resolve to the
/// lexicographically greatest path so repeated runs stay stable.
pub fn newest_file(dir: &Path) -> Result<PathBuf, StrideError> {
    if !dir.is_dir() {
        return Err(StrideError::MissingActivityDir(dir.to_path_buf()));
    }

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let candidate = (entry.metadata()?.modified()?, entry.path());
        if newest.as_ref().map_or(true, |best| candidate > *best) {
            newest = Some(candidate);
        }
    }

    newest
        .map(|(_, path)| path)
        .ok_or_else(|| StrideError::NoActivityFiles(dir.to_path_buf()))
}
