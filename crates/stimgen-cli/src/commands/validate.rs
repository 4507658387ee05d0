//! Validate command implementation
//!
//! Runs spec-level validation for every experiment in the
//! configuration file, and column checks against each item table when
//! an items directory is given.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use stimgen_expand::ItemTable;
use stimgen_spec::{
    validate_against_columns, validate_experiment, ExperimentSet, ValidationResult,
};

use super::items_path;

/// Run the validate command.
///
/// # Arguments
/// * `config_path` - Path to the experiments JSON file
/// * `items_dir` - Optional directory of `{experiment}_items.csv` tables
///
/// # Returns
/// Exit code: 0 if every experiment is valid, 1 otherwise
pub fn run(config_path: &str, items_dir: Option<&str>) -> Result<ExitCode> {
    let set = ExperimentSet::from_path(config_path)
        .with_context(|| format!("Failed to load experiments file: {}", config_path))?;

    println!("{} {}", "Validating:".cyan().bold(), config_path);

    let mut result = ValidationResult::success();
    for (experiment, spec) in set.experiments() {
        result.merge(validate_experiment(experiment, spec));

        if let Some(dir) = items_dir {
            let path = items_path(Path::new(dir), experiment);
            let table = ItemTable::from_path(&path)
                .with_context(|| format!("Failed to read item table: {}", path.display()))?;
            result.merge(validate_against_columns(
                experiment,
                spec,
                table.columns(),
            ));
        }
    }

    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} {} experiment(s) valid",
            "SUCCESS".green().bold(),
            set.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

/// Print validation results to the console.
fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}
