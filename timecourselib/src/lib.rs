//! # timecourselib
//!
//! Merge per-timepoint measurement CSVs into one wide table keyed by sample
//! identifier, and summarize each timepoint across samples.
//!
//! ## Overview
//!
//! An instrument records a panel of biological samples repeatedly, writing
//! one `<timepoint>.csv` file per recording with a `sample_id` column and a
//! single `measurement` column. This library folds such a directory into:
//!
//! - a **concatenated table**: one row per sample, one column per timepoint
//!   in recording order, joined on the identifier column (outer by default,
//!   so samples absent from some recordings keep a row with missing cells);
//! - a **summary table**: the mean of every timepoint column, with a
//!   configurable treatment of missing values (`skipna`).
//!
//! The pipeline runs in strict stages (discover, load, merge, summarize,
//! export), each exposed as its own function so intermediate results can be
//! inspected and failures attribute to a single stage. A run either
//! completes or fails fast with a [`TimecourseError`]; there is no partial
//! output.
//!
//! ## Example
//!
//! ```rust
//! use timecourselib::{run_pipeline, JoinMethod, PipelineOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("T0.csv"), "sample_id,measurement\na,1.0\nb,2.0\n").unwrap();
//! fs::write(dir.path().join("T1.csv"), "sample_id,measurement\na,3.0\n").unwrap();
//!
//! // Outer join on sample_id, missing cells skipped in the averages.
//! let result = run_pipeline(dir.path(), PipelineOptions::new()).unwrap();
//! assert_eq!(result.merged.columns(), ["T0", "T1"]);
//! assert_eq!(result.summary.rows[0].average, 1.5);
//!
//! // Inner join keeps only samples present at every timepoint.
//! let options = PipelineOptions::new().method(JoinMethod::Inner);
//! let result = run_pipeline(dir.path(), options).unwrap();
//! assert_eq!(result.merged.n_rows(), 1);
//!
//! result.export(dir.path()).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod merge;
pub mod options;
pub mod pipeline;
pub mod reader;
pub mod source;
pub mod summary;
pub mod table;

pub use error::TimecourseError;
pub use export::{write_summary_csv, write_table_csv, CONCATENATED_FILE, SUMMARY_FILE};
pub use merge::merge_tables;
pub use options::{JoinMethod, PipelineOptions};
pub use pipeline::{run_pipeline, PipelineResult};
pub use reader::{load_table, load_tables};
pub use source::{discover_files, SourceFile};
pub use summary::{summarize, Summary, SummaryRow};
pub use table::{Row, Table, Value, DEFAULT_KEY};

/// Result type for timecourselib operations
pub type Result<T> = std::result::Result<T, TimecourseError>;
