//! High-level pipeline API.
//!
//! [`run_pipeline`] chains the stages strictly in order (discover, load,
//! merge, summarize) and returns an immutable [`PipelineResult`]. Nothing
//! is computed lazily and nothing is written to disk until
//! [`PipelineResult::export`] is called, so each stage's outcome can be
//! inspected (and each failure attributed) independently of export.

use std::path::Path;

use serde::Serialize;

use crate::export;
use crate::merge::merge_tables;
use crate::options::PipelineOptions;
use crate::reader::load_tables;
use crate::source::{discover_files, SourceFile};
use crate::summary::{summarize, Summary};
use crate::table::Table;
use crate::Result;

/// The in-memory outcome of a pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Discovered input files, in processing order
    pub files: Vec<SourceFile>,
    /// The wide table joined on the sample identifier
    pub merged: Table,
    /// Per-timepoint averages over the merged table
    pub summary: Summary,
}

impl PipelineResult {
    /// Write `concatenated_data.csv` and `summary_data.csv` into `dir`.
    ///
    /// # Errors
    /// Returns [`crate::TimecourseError::WriteError`] on filesystem failure.
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<()> {
        export::export(&self.merged, &self.summary, dir)
    }
}

/// Run the full pipeline over the timepoint files in `dir`.
///
/// # Example
///
/// ```rust
/// use timecourselib::{run_pipeline, PipelineOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("T0.csv"), "sample_id,measurement\na,1.0\nb,2.0\n").unwrap();
/// fs::write(dir.path().join("T1.csv"), "sample_id,measurement\na,3.0\nb,5.0\n").unwrap();
///
/// let result = run_pipeline(dir.path(), PipelineOptions::new()).unwrap();
/// assert_eq!(result.merged.columns(), ["T0", "T1"]);
/// assert_eq!(result.summary.rows[0].average, 1.5);
/// ```
///
/// # Errors
/// Propagates the failing stage's error unchanged: discovery
/// (`DirectoryNotFound`), loading (`MalformedTable`), or merging
/// (`EmptyInput`, `JoinKeyMissing`).
pub fn run_pipeline(dir: impl AsRef<Path>, options: PipelineOptions) -> Result<PipelineResult> {
    let dir = dir.as_ref();

    let files = discover_files(dir)?;
    log::info!("processing {} timepoint files from {dir:?}", files.len());

    let tables = load_tables(&files, &options.key)?;
    let merged = merge_tables(tables, options.method, &options.key)?;
    let summary = summarize(&merged, options.skipna);

    Ok(PipelineResult {
        files,
        merged,
        summary,
    })
}
