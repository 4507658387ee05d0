//! Experiment spec validation.
//!
//! Validation here is advisory: the expander itself does not
//! pre-validate, and a region missing from an item row surfaces as an
//! expansion error at lookup time. Running validation up front turns
//! those late failures into coded diagnostics before any file is
//! written.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::spec::{ExperimentSpec, END_REGION};

/// Validates an experiment spec in isolation.
///
/// Checks that the spec defines at least one condition, that no
/// condition is empty or unnamed, and that no condition selects the
/// reserved `end` region. Duplicate regions within one condition are
/// legal (a region can be shown twice) but flagged as W001.
pub fn validate_experiment(experiment: &str, spec: &ExperimentSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    if spec.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoConditions,
            "experiment defines no conditions",
            experiment,
        ));
        return result;
    }

    for (condition, regions) in spec.conditions() {
        let path = format!("{}.{}", experiment, condition);

        if condition.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyConditionName,
                "condition name is empty",
                experiment,
            ));
        }

        if regions.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyRegionList,
                "condition selects no regions",
                path.clone(),
            ));
            continue;
        }

        let mut seen = std::collections::HashSet::new();
        for region in regions {
            if region == END_REGION {
                result.add_error(ValidationError::with_path(
                    ErrorCode::ReservedRegionName,
                    format!("region name '{}' is reserved for terminator rows", END_REGION),
                    path.clone(),
                ));
            }
            if !seen.insert(region.as_str()) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::DuplicateRegion,
                    format!("region '{}' listed more than once", region),
                    path.clone(),
                ));
            }
        }
    }

    result
}

/// Validates an experiment spec against the column names of an item table.
///
/// Every region referenced by any condition must exist as a column;
/// columns no condition references are flagged as W002.
pub fn validate_against_columns(
    experiment: &str,
    spec: &ExperimentSpec,
    columns: &[String],
) -> ValidationResult {
    let mut result = ValidationResult::success();

    for (condition, regions) in spec.conditions() {
        for region in regions {
            if !columns.iter().any(|c| c == region) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::UnknownRegion,
                    format!("region '{}' is not a column of the item table", region),
                    format!("{}.{}", experiment, condition),
                ));
            }
        }
    }

    let referenced = spec.referenced_regions();
    for column in columns {
        if !referenced.contains(&column.as_str()) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::UnusedColumn,
                format!("item table column '{}' is not used by any condition", column),
                experiment,
            ));
        }
    }

    result
}
