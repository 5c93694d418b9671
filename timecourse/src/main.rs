//! # timecourse
//!
//! CLI for merging per-timepoint measurement CSVs and summarizing them.
//!
//! Reads every `<timepoint>.csv` file in a directory (header
//! `sample_id,measurement`), joins them into one wide table keyed by
//! sample identifier, averages each timepoint column, prints both tables,
//! and writes `concatenated_data.csv` and `summary_data.csv`.
//!
//! ## Usage
//!
//! ```bash
//! # Outer join on sample_id, missing values skipped in the averages
//! timecourse data/
//!
//! # Keep only samples present at every timepoint, zero-fill the averages
//! timecourse data/ --method inner --no-skipna
//!
//! # Write the output files somewhere else
//! timecourse data/ --out-dir results/
//!
//! # Machine-readable results, no files written
//! timecourse data/ --json --no-export
//! ```

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::Style;
use timecourselib::{run_pipeline, JoinMethod, PipelineOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Merge per-timepoint measurement CSVs and summarize each timepoint")]
struct Cli {
    /// Directory containing the <timepoint>.csv input files
    directory: PathBuf,

    /// Join method applied at each merge step (outer, inner, left, right)
    #[arg(long, default_value = "outer")]
    method: JoinMethod,

    /// Name of the sample identifier column
    #[arg(long, default_value = "sample_id")]
    key: String,

    /// Zero-fill missing cells in the averages instead of skipping them
    #[arg(long)]
    no_skipna: bool,

    /// Directory the two output files are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the results as JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Skip writing concatenated_data.csv and summary_data.csv
    #[arg(long)]
    no_export: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(error) = run(Cli::parse()) {
        let prefix = Style::new().red().bold().apply_to("error:");
        eprintln!("{prefix} {error:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    log::debug!("{cli:#?}");

    let options = PipelineOptions::new()
        .method(cli.method)
        .key(&cli.key)
        .skipna(!cli.no_skipna);

    let result = run_pipeline(&cli.directory, options)
        .with_context(|| format!("failed to process {:?}", cli.directory))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_result(&result);
    }

    if !cli.no_export {
        result
            .export(&cli.out_dir)
            .with_context(|| format!("failed to export to {:?}", cli.out_dir))?;
    }

    Ok(())
}
