//! Expand command implementation
//!
//! Expands one experiment's item table into a long-format sentence
//! table.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use stimgen_expand::{expand_items, write_sentences, ItemTable};
use stimgen_spec::{ExpandOptions, ExperimentSet};

/// Run the expand command.
///
/// # Arguments
/// * `config_path` - Path to the experiments JSON file
/// * `experiment` - Name of the experiment to expand
/// * `items_path` - Path to the semicolon-delimited item table CSV
/// * `output_path` - Path of the sentence table CSV to write
/// * `options` - Run-wide expansion settings
///
/// # Returns
/// Exit code: 0 on success (any failure propagates as an error)
pub fn run(
    config_path: &str,
    experiment: &str,
    items_path: &str,
    output_path: &str,
    options: ExpandOptions,
) -> Result<ExitCode> {
    let set = ExperimentSet::from_path(config_path)
        .with_context(|| format!("Failed to load experiments file: {}", config_path))?;
    let spec = set
        .experiment(experiment)
        .with_context(|| format!("Experiment not found in {}", config_path))?;

    let table = ItemTable::from_path(items_path)
        .with_context(|| format!("Failed to read item table: {}", items_path))?;

    println!(
        "{} {} ({} items x {} conditions)",
        "Expanding:".cyan().bold(),
        experiment,
        table.len(),
        spec.condition_count()
    );

    let rows = expand_items(&table, spec, options)
        .with_context(|| format!("Expansion failed for experiment '{}'", experiment))?;
    write_sentences(output_path, &rows)
        .with_context(|| format!("Failed to write sentence table: {}", output_path))?;

    println!(
        "{} Wrote {} rows to {}",
        "SUCCESS".green().bold(),
        rows.len(),
        output_path
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "demo": {
            "C1": ["region_a", "region_b"]
        }
    }"#;

    const ITEMS: &str = "region_a;region_b\nthe cat;sat down\n";

    fn write_inputs(dir: &tempfile::TempDir) -> (String, String, String) {
        let config = dir.path().join("experiments.json");
        let items = dir.path().join("demo_items.csv");
        let output = dir.path().join("demo.csv");
        std::fs::write(&config, CONFIG).unwrap();
        std::fs::write(&items, ITEMS).unwrap();
        (
            config.to_str().unwrap().to_string(),
            items.to_str().unwrap().to_string(),
            output.to_str().unwrap().to_string(),
        )
    }

    #[test]
    fn expand_writes_expected_sentence_table() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, items, output) = write_inputs(&tmp);

        let code = run(&config, "demo", &items, &output, ExpandOptions::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\xef\xbb\xbf"));
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(
            text,
            ",sent_index,word_index,word,region,condition\n\
             0,0,0,the,region_a,C1\n\
             1,0,1,cat,region_a,C1\n\
             2,0,2,sat,region_b,C1\n\
             3,0,3,down,region_b,C1\n\
             4,0,5,.,end,C1\n\
             5,0,6,<eos>,end,C1\n"
        );
    }

    #[test]
    fn expand_with_autocaps_title_cases_first_word() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, items, output) = write_inputs(&tmp);

        let options = ExpandOptions {
            autocaps: true,
            ..ExpandOptions::default()
        };
        run(&config, "demo", &items, &output, options).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("0,0,0,The,region_a,C1"));
        assert!(text.contains("1,0,1,cat,region_a,C1"));
    }

    #[test]
    fn expand_unknown_experiment_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let (config, items, output) = write_inputs(&tmp);

        let err = run(&config, "nope", &items, &output, ExpandOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Experiment not found"));
        assert!(!std::path::Path::new(&output).exists());
    }

    #[test]
    fn expand_missing_region_fails_without_output() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("experiments.json");
        let items = tmp.path().join("demo_items.csv");
        let output = tmp.path().join("demo.csv");
        std::fs::write(&config, r#"{"demo": {"C1": ["missing"]}}"#).unwrap();
        std::fs::write(&items, ITEMS).unwrap();

        let err = run(
            config.to_str().unwrap(),
            "demo",
            items.to_str().unwrap(),
            output.to_str().unwrap(),
            ExpandOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Expansion failed"));
        assert!(!output.exists());
    }
}
