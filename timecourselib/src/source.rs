//! Timepoint file discovery and ordering.
//!
//! The instrument writes one `<timepoint>.csv` file per recording into a
//! single directory. This module lists that directory, keeps the CSV files,
//! and puts them into processing order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::TimecourseError;
use crate::Result;

/// File extension accepted by [`discover_files`].
const CSV_EXTENSION: &str = "csv";

/// A discovered timepoint measurement file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path to the file on disk
    pub path: PathBuf,
    /// Timepoint label: the file name up to the first `.`
    pub label: String,
}

impl SourceFile {
    fn from_path(path: PathBuf) -> Self {
        let label = timepoint_label(&path);
        Self { path, label }
    }
}

/// Derive the timepoint label from a file name (the stem before the first `.`).
fn timepoint_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Ordering key: the timepoint label minus its first character.
///
/// Timepoint files follow a fixed prefix-plus-number convention (`T0.csv`,
/// `T1.csv`, ...), so dropping the prefix character and comparing the rest
/// recovers the recording order. The comparison is lexicographic, not
/// numeric: `T10` sorts before `T2`. That matches the upstream naming
/// convention and is kept as-is.
fn sort_key(label: &str) -> String {
    label.chars().skip(1).collect()
}

/// Discover the timepoint CSV files in `dir`, in processing order.
///
/// Only regular files directly inside `dir` with a `csv` extension
/// (ASCII-case-insensitive) are accepted; everything else is skipped
/// silently, and subdirectories are never entered. The returned order is
/// the pipeline's processing order and is significant for inner joins.
///
/// # Errors
/// Returns [`TimecourseError::DirectoryNotFound`] if `dir` does not exist
/// or is not a directory.
pub fn discover_files(dir: impl AsRef<Path>) -> Result<Vec<SourceFile>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(TimecourseError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if entry.file_type().is_file() && has_csv_extension(entry.path()) {
            files.push(SourceFile::from_path(entry.path().to_path_buf()));
        }
    }

    files.sort_by(|a, b| sort_key(&a.label).cmp(&sort_key(&b.label)));

    log::debug!("discovered {} timepoint files in {dir:?}", files.len());

    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}
