//! stimgen CLI - Command-line interface for stimulus sentence expansion
//!
//! This binary provides commands for validating experiment
//! configurations and expanding wide-format item tables into
//! long-format sentence tables.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use stimgen_spec::ExpandOptions;

use stimgen_cli::commands;

/// stimgen - Experimental Stimulus Sentence Expansion
#[derive(Parser)]
#[command(name = "stimgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand one experiment's item table into a sentence table
    Expand {
        /// Path to the experiments JSON file
        #[arg(short, long)]
        config: String,

        /// Name of the experiment to expand
        #[arg(short, long)]
        experiment: String,

        /// Path to the item table CSV (semicolon-delimited, UTF-8)
        #[arg(short, long)]
        items: String,

        /// Path of the sentence table CSV to write
        #[arg(short, long)]
        output: String,

        /// Title-case the first word of every sentence
        #[arg(long)]
        autocaps: bool,

        /// Item tables carry their own end region; do not append "." and "<eos>" rows
        #[arg(long)]
        end_region_included: bool,
    },

    /// Expand every experiment in the configuration file
    ExpandAll {
        /// Path to the experiments JSON file
        #[arg(short, long)]
        config: String,

        /// Directory holding {experiment}_items.csv input tables
        #[arg(long)]
        items_dir: String,

        /// Directory receiving {experiment}.csv sentence tables
        #[arg(long)]
        out_dir: String,

        /// Title-case the first word of every sentence
        #[arg(long)]
        autocaps: bool,

        /// Item tables carry their own end region; do not append "." and "<eos>" rows
        #[arg(long)]
        end_region_included: bool,
    },

    /// Validate the configuration file without writing any output
    Validate {
        /// Path to the experiments JSON file
        #[arg(short, long)]
        config: String,

        /// Also check regions against {experiment}_items.csv tables in this directory
        #[arg(long)]
        items_dir: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Expand {
            config,
            experiment,
            items,
            output,
            autocaps,
            end_region_included,
        } => commands::expand::run(
            &config,
            &experiment,
            &items,
            &output,
            ExpandOptions {
                autocaps,
                end_condition_included: end_region_included,
            },
        ),
        Commands::ExpandAll {
            config,
            items_dir,
            out_dir,
            autocaps,
            end_region_included,
        } => commands::expand_all::run(
            &config,
            &items_dir,
            &out_dir,
            ExpandOptions {
                autocaps,
                end_condition_included: end_region_included,
            },
        ),
        Commands::Validate { config, items_dir } => {
            commands::validate::run(&config, items_dir.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_expand() {
        let cli = Cli::try_parse_from([
            "stimgen",
            "expand",
            "--config",
            "experiments.json",
            "--experiment",
            "exp1",
            "--items",
            "exp1_items.csv",
            "--output",
            "exp1.csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Expand {
                config,
                experiment,
                items,
                output,
                autocaps,
                end_region_included,
            } => {
                assert_eq!(config, "experiments.json");
                assert_eq!(experiment, "exp1");
                assert_eq!(items, "exp1_items.csv");
                assert_eq!(output, "exp1.csv");
                assert!(!autocaps);
                assert!(!end_region_included);
            }
            _ => panic!("expected expand command"),
        }
    }

    #[test]
    fn test_cli_parses_expand_with_flags() {
        let cli = Cli::try_parse_from([
            "stimgen",
            "expand",
            "--config",
            "experiments.json",
            "--experiment",
            "exp1",
            "--items",
            "exp1_items.csv",
            "--output",
            "exp1.csv",
            "--autocaps",
            "--end-region-included",
        ])
        .unwrap();
        match cli.command {
            Commands::Expand {
                autocaps,
                end_region_included,
                ..
            } => {
                assert!(autocaps);
                assert!(end_region_included);
            }
            _ => panic!("expected expand command"),
        }
    }

    #[test]
    fn test_cli_requires_experiment_for_expand() {
        let err = Cli::try_parse_from([
            "stimgen",
            "expand",
            "--config",
            "experiments.json",
            "--items",
            "items.csv",
            "--output",
            "out.csv",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("--experiment"));
    }

    #[test]
    fn test_cli_parses_expand_all() {
        let cli = Cli::try_parse_from([
            "stimgen",
            "expand-all",
            "--config",
            "experiments.json",
            "--items-dir",
            "data/test_items",
            "--out-dir",
            "data/test_sentences",
        ])
        .unwrap();
        match cli.command {
            Commands::ExpandAll {
                config,
                items_dir,
                out_dir,
                autocaps,
                end_region_included,
            } => {
                assert_eq!(config, "experiments.json");
                assert_eq!(items_dir, "data/test_items");
                assert_eq!(out_dir, "data/test_sentences");
                assert!(!autocaps);
                assert!(!end_region_included);
            }
            _ => panic!("expected expand-all command"),
        }
    }

    #[test]
    fn test_cli_parses_validate() {
        let cli =
            Cli::try_parse_from(["stimgen", "validate", "--config", "experiments.json"]).unwrap();
        match cli.command {
            Commands::Validate { config, items_dir } => {
                assert_eq!(config, "experiments.json");
                assert!(items_dir.is_none());
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_items_dir() {
        let cli = Cli::try_parse_from([
            "stimgen",
            "validate",
            "--config",
            "experiments.json",
            "--items-dir",
            "data/test_items",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate { items_dir, .. } => {
                assert_eq!(items_dir.as_deref(), Some("data/test_items"));
            }
            _ => panic!("expected validate command"),
        }
    }
}
