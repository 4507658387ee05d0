//! Experiment spec types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SpecError;

/// Region name reserved for synthetic sentence terminators.
///
/// Item tables must not use this name for a column that conditions
/// select; the expander attaches it to the "." and "<eos>" rows.
pub const END_REGION: &str = "end";

/// An ordered mapping from condition name to the regions that are
/// concatenated, in order, to form a sentence under that condition.
///
/// Iteration order is the insertion order of the underlying JSON
/// document, which fixes the condition-major order of the expanded
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentSpec {
    conditions: IndexMap<String, Vec<String>>,
}

impl ExperimentSpec {
    /// Creates an empty experiment spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition with its ordered region list.
    ///
    /// Re-inserting an existing condition name replaces its region list
    /// without changing its position.
    pub fn insert_condition(
        &mut self,
        name: impl Into<String>,
        regions: Vec<String>,
    ) -> Option<Vec<String>> {
        self.conditions.insert(name.into(), regions)
    }

    /// Returns the region list for a condition, if present.
    pub fn regions(&self, condition: &str) -> Option<&[String]> {
        self.conditions.get(condition).map(Vec::as_slice)
    }

    /// Iterates over (condition name, region list) pairs in spec order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.conditions
            .iter()
            .map(|(name, regions)| (name.as_str(), regions.as_slice()))
    }

    /// Returns the number of conditions.
    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }

    /// Returns true if the spec defines no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns every region name referenced by any condition, deduplicated,
    /// in first-reference order.
    pub fn referenced_regions(&self) -> Vec<&str> {
        let mut seen = indexmap::IndexSet::new();
        for regions in self.conditions.values() {
            for region in regions {
                seen.insert(region.as_str());
            }
        }
        seen.into_iter().collect()
    }
}

/// The top level of the configuration file: an ordered mapping from
/// experiment name to its condition spec.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentSet {
    experiments: IndexMap<String, ExperimentSpec>,
}

impl ExperimentSet {
    /// Parses an experiment set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads an experiment set from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the experiment set to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the spec for an experiment, or `SpecError::UnknownExperiment`.
    pub fn experiment(&self, name: &str) -> Result<&ExperimentSpec, SpecError> {
        self.experiments
            .get(name)
            .ok_or_else(|| SpecError::UnknownExperiment(name.to_string()))
    }

    /// Iterates over (experiment name, spec) pairs in file order.
    pub fn experiments(&self) -> impl Iterator<Item = (&str, &ExperimentSpec)> {
        self.experiments
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Adds an experiment.
    pub fn insert_experiment(
        &mut self,
        name: impl Into<String>,
        spec: ExperimentSpec,
    ) -> Option<ExperimentSpec> {
        self.experiments.insert(name.into(), spec)
    }

    /// Returns the number of experiments.
    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

/// Run-wide expansion settings.
///
/// These were process-wide flags in earlier tooling; they are now an
/// explicit value passed into the expansion operation and fixed for
/// the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandOptions {
    /// Title-case the first word of every sentence.
    pub autocaps: bool,
    /// The item table carries its own end-of-sentence region, so no
    /// synthetic terminator rows are appended.
    pub end_condition_included: bool,
}
