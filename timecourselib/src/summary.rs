//! Per-timepoint averaging across samples.

use serde::{Deserialize, Serialize};

use crate::table::Table;

/// One summary row: a timepoint label and its average over samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Timepoint column label
    pub time_point: String,
    /// Mean measurement across samples
    pub average: f64,
}

/// The per-timepoint summary of a merged table.
///
/// Holds one row per value column of the source table, in the same order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Summary rows, in the merged table's column order
    pub rows: Vec<SummaryRow>,
}

/// Average every value column of `table` across its rows.
///
/// With `skipna`, missing cells are excluded from both the sum and the
/// count, so the mean runs over present values only; a column with no
/// present values averages to NaN, which is propagated rather than treated
/// as an error. Without `skipna`, missing cells count as `0.0` and the mean
/// runs over every row.
///
/// A table with no value columns yields an empty summary.
pub fn summarize(table: &Table, skipna: bool) -> Summary {
    let rows = table
        .columns()
        .iter()
        .enumerate()
        .map(|(col, label)| SummaryRow {
            time_point: label.clone(),
            average: column_mean(table, col, skipna),
        })
        .collect();

    Summary { rows }
}

fn column_mean(table: &Table, col: usize, skipna: bool) -> f64 {
    let cells = table.rows().iter().map(|row| row.values[col]);

    let vals: Vec<f64> = if skipna {
        cells.filter_map(|v| v.as_f64()).collect()
    } else {
        cells.map(|v| v.or_zero()).collect()
    };

    mean(&vals)
}

fn mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}
