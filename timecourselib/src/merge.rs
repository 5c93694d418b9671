//! Progressive joining of per-timepoint tables.
//!
//! The merged table is built by a left fold: the first table seeds the
//! accumulator and every subsequent table is joined onto it. Processing
//! order is significant (under an inner join, a sample dropped at any step
//! is never reintroduced), so callers must pass tables in discovery order.

use std::collections::{HashMap, HashSet};

use crate::error::TimecourseError;
use crate::options::JoinMethod;
use crate::table::{Table, Value};
use crate::Result;

/// Fold `tables` into a single wide table joined on `key`.
///
/// The result's value columns are the input tables' value columns in fold
/// order; the key column appears once. With exactly one table, that table
/// is returned unchanged and no key validation is performed.
///
/// # Errors
/// Returns [`TimecourseError::EmptyInput`] when `tables` is empty, and
/// [`TimecourseError::JoinKeyMissing`] when a joined table's key column is
/// not `key`.
pub fn merge_tables(tables: Vec<Table>, method: JoinMethod, key: &str) -> Result<Table> {
    let mut tables = tables.into_iter();
    let mut merged = tables.next().ok_or(TimecourseError::EmptyInput)?;

    for table in tables {
        merged = join(merged, table, method, key)?;
    }

    log::debug!(
        "merged table has {} rows and {} timepoint columns ({} join)",
        merged.n_rows(),
        merged.columns().len(),
        method.as_str()
    );

    Ok(merged)
}

/// Join two tables on `key` with the given method.
fn join(left: Table, right: Table, method: JoinMethod, key: &str) -> Result<Table> {
    ensure_key(&left, key)?;
    ensure_key(&right, key)?;

    let columns: Vec<String> = left
        .columns()
        .iter()
        .chain(right.columns())
        .cloned()
        .collect();
    let mut out = Table::new(key, columns);

    let left_width = left.columns().len();
    let right_width = right.columns().len();

    // First occurrence wins; the input format has one row per sample.
    let right_index = index_by_key(&right);

    match method {
        JoinMethod::Inner => {
            for row in left.rows() {
                if let Some(&idx) = right_index.get(row.key.as_str()) {
                    let mut values = row.values.clone();
                    values.extend_from_slice(&right.rows()[idx].values);
                    out.push_row(row.key.clone(), values);
                }
            }
        }
        JoinMethod::Left | JoinMethod::Outer => {
            for row in left.rows() {
                let mut values = row.values.clone();
                match right_index.get(row.key.as_str()) {
                    Some(&idx) => values.extend_from_slice(&right.rows()[idx].values),
                    None => values.resize(left_width + right_width, Value::Missing),
                }
                out.push_row(row.key.clone(), values);
            }

            if method == JoinMethod::Outer {
                // Unmatched right-side samples follow, in right-table order.
                let left_keys: HashSet<&str> =
                    left.rows().iter().map(|row| row.key.as_str()).collect();
                for row in right.rows() {
                    if !left_keys.contains(row.key.as_str()) {
                        let mut values = vec![Value::Missing; left_width];
                        values.extend_from_slice(&row.values);
                        out.push_row(row.key.clone(), values);
                    }
                }
            }
        }
        JoinMethod::Right => {
            let left_index = index_by_key(&left);
            for row in right.rows() {
                let mut values = match left_index.get(row.key.as_str()) {
                    Some(&idx) => left.rows()[idx].values.clone(),
                    None => vec![Value::Missing; left_width],
                };
                values.extend_from_slice(&row.values);
                out.push_row(row.key.clone(), values);
            }
        }
    }

    Ok(out)
}

fn index_by_key(table: &Table) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(table.n_rows());
    for (idx, row) in table.rows().iter().enumerate() {
        index.entry(row.key.as_str()).or_insert(idx);
    }
    index
}

fn ensure_key(table: &Table, key: &str) -> Result<()> {
    if table.key() != key {
        return Err(TimecourseError::JoinKeyMissing {
            key: key.to_string(),
            found: table.key().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(label: &str, rows: &[(&str, Value)]) -> Table {
        let mut t = Table::new("sample_id", vec![label.to_string()]);
        for (key, value) in rows {
            t.push_row(key.to_string(), vec![*value]);
        }
        t
    }

    fn num(v: f64) -> Value {
        Value::Number(v)
    }

    #[test]
    fn test_merge_empty_input() {
        let result = merge_tables(Vec::new(), JoinMethod::Outer, "sample_id");
        assert!(matches!(result, Err(TimecourseError::EmptyInput)));
    }

    #[test]
    fn test_merge_single_table_is_identity() {
        let t = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let expected = t.clone();

        let merged = merge_tables(vec![t], JoinMethod::Inner, "sample_id").unwrap();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_outer_join_is_union_in_left_then_right_order() {
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let t1 = table("T1", &[("c", num(30.0)), ("a", num(10.0))]);

        let merged = merge_tables(vec![t0, t1], JoinMethod::Outer, "sample_id").unwrap();

        assert_eq!(merged.columns(), ["T0", "T1"]);
        let keys: Vec<&str> = merged.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);

        assert_eq!(merged.rows()[0].values, [num(1.0), num(10.0)]);
        assert_eq!(merged.rows()[1].values, [num(2.0), Value::Missing]);
        assert_eq!(merged.rows()[2].values, [Value::Missing, num(30.0)]);
    }

    #[test]
    fn test_inner_join_is_intersection() {
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let t1 = table("T1", &[("b", num(20.0)), ("c", num(30.0))]);

        let merged = merge_tables(vec![t0, t1], JoinMethod::Inner, "sample_id").unwrap();

        assert_eq!(merged.n_rows(), 1);
        assert_eq!(merged.rows()[0].key, "b");
        assert_eq!(merged.rows()[0].values, [num(2.0), num(20.0)]);
    }

    #[test]
    fn test_inner_join_never_reintroduces_dropped_samples() {
        // "a" survives t0∩t1 but not t1; it must not reappear via t2.
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let t1 = table("T1", &[("b", num(20.0))]);
        let t2 = table("T2", &[("a", num(100.0)), ("b", num(200.0))]);

        let merged =
            merge_tables(vec![t0, t1, t2], JoinMethod::Inner, "sample_id").unwrap();

        assert_eq!(merged.columns(), ["T0", "T1", "T2"]);
        assert_eq!(merged.n_rows(), 1);
        assert_eq!(merged.rows()[0].key, "b");
    }

    #[test]
    fn test_outer_row_count_at_least_max_inner_at_most_min() {
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0)), ("c", num(3.0))]);
        let t1 = table("T1", &[("b", num(4.0)), ("d", num(5.0))]);
        let t2 = table("T2", &[("b", num(6.0)), ("c", num(7.0)), ("e", num(8.0))]);

        let max_rows = 3;
        let min_rows = 2;

        let outer = merge_tables(
            vec![t0.clone(), t1.clone(), t2.clone()],
            JoinMethod::Outer,
            "sample_id",
        )
        .unwrap();
        assert!(outer.n_rows() >= max_rows);

        let inner = merge_tables(vec![t0, t1, t2], JoinMethod::Inner, "sample_id").unwrap();
        assert!(inner.n_rows() <= min_rows);
    }

    #[test]
    fn test_left_join_keeps_accumulator_rows() {
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let t1 = table("T1", &[("b", num(20.0)), ("c", num(30.0))]);

        let merged = merge_tables(vec![t0, t1], JoinMethod::Left, "sample_id").unwrap();

        let keys: Vec<&str> = merged.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(merged.rows()[0].values, [num(1.0), Value::Missing]);
    }

    #[test]
    fn test_right_join_keeps_incoming_rows_in_their_order() {
        let t0 = table("T0", &[("a", num(1.0)), ("b", num(2.0))]);
        let t1 = table("T1", &[("c", num(30.0)), ("b", num(20.0))]);

        let merged = merge_tables(vec![t0, t1], JoinMethod::Right, "sample_id").unwrap();

        let keys: Vec<&str> = merged.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["c", "b"]);
        assert_eq!(merged.rows()[0].values, [Value::Missing, num(30.0)]);
        assert_eq!(merged.rows()[1].values, [num(2.0), num(20.0)]);
    }

    #[test]
    fn test_join_key_missing() {
        let t0 = table("T0", &[("a", num(1.0))]);
        let mut t1 = Table::new("well_id", vec!["T1".to_string()]);
        t1.push_row("a".to_string(), vec![num(2.0)]);

        let err = merge_tables(vec![t0, t1], JoinMethod::Outer, "sample_id").unwrap_err();
        assert!(matches!(
            err,
            TimecourseError::JoinKeyMissing { ref key, ref found }
                if key == "sample_id" && found == "well_id"
        ));
    }

    #[test]
    fn test_merged_columns_follow_fold_order() {
        let t0 = table("T0", &[("a", num(1.0))]);
        let t10 = table("T10", &[("a", num(2.0))]);
        let t2 = table("T2", &[("a", num(3.0))]);

        let merged =
            merge_tables(vec![t0, t10, t2], JoinMethod::Outer, "sample_id").unwrap();
        assert_eq!(merged.columns(), ["T0", "T10", "T2"]);
    }
}
