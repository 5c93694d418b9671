//! CSV export of the merged and summary tables.

use std::path::Path;

use csv::Writer;

use crate::error::TimecourseError;
use crate::summary::Summary;
use crate::table::Table;
use crate::Result;

/// File name of the exported merged table.
pub const CONCATENATED_FILE: &str = "concatenated_data.csv";

/// File name of the exported summary table.
pub const SUMMARY_FILE: &str = "summary_data.csv";

/// Write both output tables into `dir` under their fixed names.
///
/// Existing files are overwritten without warning.
pub fn export(merged: &Table, summary: &Summary, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();

    write_table_csv(merged, dir.join(CONCATENATED_FILE))?;
    write_summary_csv(summary, dir.join(SUMMARY_FILE))?;

    log::info!("exported {CONCATENATED_FILE} and {SUMMARY_FILE} to {dir:?}");

    Ok(())
}

/// Write `table` as comma-delimited text: header row, one line per sample,
/// no index column. Missing cells become empty fields.
///
/// # Errors
/// Returns [`TimecourseError::WriteError`] on any filesystem or encoder
/// failure.
pub fn write_table_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path).map_err(|e| write_error(path, e))?;

    writer
        .write_record(table.header())
        .map_err(|e| write_error(path, e))?;

    for row in table.rows() {
        let mut record = Vec::with_capacity(1 + row.values.len());
        record.push(row.key.clone());
        record.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(record).map_err(|e| write_error(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| write_error(path, csv::Error::from(e)))?;

    Ok(())
}

/// Write `summary` as comma-delimited text with a `time_point,average`
/// header.
///
/// # Errors
/// Returns [`TimecourseError::WriteError`] on any filesystem or encoder
/// failure.
pub fn write_summary_csv(summary: &Summary, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = Writer::from_path(path).map_err(|e| write_error(path, e))?;

    writer
        .write_record(["time_point", "average"])
        .map_err(|e| write_error(path, e))?;

    for row in &summary.rows {
        writer
            .write_record([row.time_point.clone(), row.average.to_string()])
            .map_err(|e| write_error(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| write_error(path, csv::Error::from(e)))?;

    Ok(())
}

fn write_error(path: &Path, source: csv::Error) -> TimecourseError {
    TimecourseError::WriteError {
        path: path.to_path_buf(),
        source,
    }
}
