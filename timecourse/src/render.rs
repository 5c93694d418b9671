//! Plain-text rendering of pipeline results.

use console::Style;
use timecourselib::{PipelineResult, Summary, Table};

/// Print the discovered files, the merged table, and the summary.
pub fn print_result(result: &PipelineResult) {
    let heading = Style::new().bold();

    println!("{}", heading.apply_to("Input files"));
    for file in &result.files {
        println!("  {}  {}", file.label, file.path.display());
    }

    println!();
    println!("{}", heading.apply_to("Concatenated data"));
    print_table(&result.merged);

    println!();
    println!("{}", heading.apply_to("Summary"));
    print_summary(&result.summary);
}

/// Print a table with padded columns: key left-aligned, cells right-aligned.
fn print_table(table: &Table) {
    let header = table.header();

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in table.rows() {
        widths[0] = widths[0].max(row.key.len());
        for (i, value) in row.values.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(value.to_string().len());
        }
    }

    print_padded_row(&header, &widths);
    for row in table.rows() {
        let mut cells = vec![row.key.clone()];
        cells.extend(row.values.iter().map(|v| v.to_string()));
        print_padded_row(&cells, &widths);
    }
}

fn print_summary(summary: &Summary) {
    let mut widths = ["time_point".len(), "average".len()];
    let formatted: Vec<(String, String)> = summary
        .rows
        .iter()
        .map(|row| (row.time_point.clone(), row.average.to_string()))
        .collect();
    for (label, average) in &formatted {
        widths[0] = widths[0].max(label.len());
        widths[1] = widths[1].max(average.len());
    }

    print_padded_row(&["time_point".to_string(), "average".to_string()], &widths);
    for (label, average) in formatted {
        print_padded_row(&[label, average], &widths);
    }
}

fn print_padded_row(cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!("  {cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    println!("{line}");
}
