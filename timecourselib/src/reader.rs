//! Table loading: one CSV file per timepoint.
//!
//! Each input file holds the identifier column plus a single `measurement`
//! column. Loading renames that column to the file's timepoint label so the
//! merge step can stack timepoints side by side.

use csv::Reader;

use crate::error::TimecourseError;
use crate::source::SourceFile;
use crate::table::{Table, Value};
use crate::Result;

/// Load every discovered file into a [`Table`], preserving order.
///
/// # Errors
/// Returns [`TimecourseError::MalformedTable`] for any file that cannot be
/// loaded; see [`load_table`].
pub fn load_tables(files: &[SourceFile], key: &str) -> Result<Vec<Table>> {
    files.iter().map(|file| load_table(file, key)).collect()
}

/// Load a single timepoint file.
///
/// The file must parse as comma-delimited text with a header row containing
/// the `key` column and exactly one other column; that column is renamed to
/// the file's timepoint label. Cells parse as `f64` where possible and load
/// as [`Value::Missing`] otherwise, so empty fields and `NaN` spellings
/// become the missing marker.
///
/// # Errors
/// Returns [`TimecourseError::MalformedTable`] when the file cannot be
/// parsed, the `key` column is absent, or the non-key column count is not
/// exactly one (ambiguous rename target).
pub fn load_table(file: &SourceFile, key: &str) -> Result<Table> {
    let mut reader =
        Reader::from_path(&file.path).map_err(|e| malformed(file, e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(file, e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let key_idx = headers
        .iter()
        .position(|h| h == key)
        .ok_or_else(|| malformed(file, format!("missing identifier column '{key}'")))?;

    let value_idxs: Vec<usize> = (0..headers.len()).filter(|&i| i != key_idx).collect();
    if value_idxs.len() != 1 {
        return Err(malformed(
            file,
            format!(
                "expected exactly one measurement column, found {}",
                value_idxs.len()
            ),
        ));
    }
    let value_idx = value_idxs[0];

    // The measurement column takes the file's timepoint label.
    let mut table = Table::new(key, vec![file.label.clone()]);

    for (row_no, record) in reader.records().enumerate() {
        let record = record.map_err(|e| malformed(file, format!("row {row_no}: {e}")))?;
        let sample = record.get(key_idx).unwrap_or("").trim().to_string();
        let value = parse_cell(record.get(value_idx).unwrap_or(""));
        table.push_row(sample, vec![value]);
    }

    log::debug!("loaded {} rows from {:?}", table.n_rows(), file.path);

    Ok(table)
}

/// Parse one measurement cell: numeric when parseable, missing otherwise.
///
/// A cell that parses to a float NaN (e.g. the literal `NaN`) is normalized
/// to [`Value::Missing`] so the sentinel is never shadowed by a numeric NaN.
fn parse_cell(cell: &str) -> Value {
    match cell.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Value::Number(v),
        _ => Value::Missing,
    }
}

fn malformed(file: &SourceFile, message: String) -> TimecourseError {
    TimecourseError::MalformedTable {
        path: file.path.clone(),
        message,
    }
}
