//! Expand-all command implementation
//!
//! Expands every experiment in the configuration file. Item tables are
//! read from `{items_dir}/{experiment}_items.csv` and sentence tables
//! written to `{out_dir}/{experiment}.csv`. The first failing
//! experiment aborts the run; later experiments are not attempted.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use stimgen_expand::{expand_items, write_sentences, ItemTable};
use stimgen_spec::{ExpandOptions, ExperimentSet};

use super::{items_path, sentences_path};

/// Run the expand-all command.
///
/// # Arguments
/// * `config_path` - Path to the experiments JSON file
/// * `items_dir` - Directory holding `{experiment}_items.csv` inputs
/// * `out_dir` - Directory receiving `{experiment}.csv` outputs
/// * `options` - Run-wide expansion settings
///
/// # Returns
/// Exit code: 0 on success (the first failure propagates as an error)
pub fn run(
    config_path: &str,
    items_dir: &str,
    out_dir: &str,
    options: ExpandOptions,
) -> Result<ExitCode> {
    let set = ExperimentSet::from_path(config_path)
        .with_context(|| format!("Failed to load experiments file: {}", config_path))?;

    let items_dir = Path::new(items_dir);
    let out_dir = Path::new(out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    println!(
        "{} {} experiment(s) from {}",
        "Expanding:".cyan().bold(),
        set.len(),
        config_path
    );

    let mut total_rows = 0;
    for (experiment, spec) in set.experiments() {
        let input = items_path(items_dir, experiment);
        let output = sentences_path(out_dir, experiment);

        let table = ItemTable::from_path(&input)
            .with_context(|| format!("Failed to read item table: {}", input.display()))?;
        let rows = expand_items(&table, spec, options)
            .with_context(|| format!("Expansion failed for experiment '{}'", experiment))?;
        write_sentences(&output, &rows)
            .with_context(|| format!("Failed to write sentence table: {}", output.display()))?;

        println!(
            "  {} {} ({} items, {} rows) -> {}",
            "ok".green(),
            experiment,
            table.len(),
            rows.len(),
            output.display()
        );
        total_rows += rows.len();
    }

    println!(
        "\n{} {} experiment(s), {} rows total",
        "SUCCESS".green().bold(),
        set.len(),
        total_rows
    );

    Ok(ExitCode::SUCCESS)
}
