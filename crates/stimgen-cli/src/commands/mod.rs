//! CLI command implementations

pub mod expand;
pub mod expand_all;
pub mod validate;

use std::path::{Path, PathBuf};

/// Input path of an experiment's item table under an items directory.
pub(crate) fn items_path(items_dir: &Path, experiment: &str) -> PathBuf {
    items_dir.join(format!("{}_items.csv", experiment))
}

/// Output path of an experiment's sentence table under an output directory.
pub(crate) fn sentences_path(out_dir: &Path, experiment: &str) -> PathBuf {
    out_dir.join(format!("{}.csv", experiment))
}
