//! stimgen Experiment Spec Library
//!
//! This crate provides types, loading, and validation for stimgen
//! experiment configuration files. A configuration file is a JSON
//! document mapping experiment names to condition specs; a condition
//! spec maps condition names to the ordered list of item-table regions
//! concatenated to form a sentence under that condition.
//!
//! # Example
//!
//! ```
//! use stimgen_spec::{ExperimentSet, validation::validate_experiment};
//!
//! let json = r#"{
//!     "agreement": {
//!         "match":    ["subject", "verb_match", "continuation"],
//!         "mismatch": ["subject", "verb_mismatch", "continuation"]
//!     }
//! }"#;
//!
//! let set = ExperimentSet::from_json(json).unwrap();
//! let spec = set.experiment("agreement").unwrap();
//! assert_eq!(spec.condition_count(), 2);
//!
//! let result = validate_experiment("agreement", spec);
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for loading and validation
//! - [`spec`]: Experiment set, condition spec, and expansion options
//! - [`validation`]: Spec validation functions

pub mod error;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use spec::{ExpandOptions, ExperimentSet, ExperimentSpec, END_REGION};
pub use validation::{validate_against_columns, validate_experiment};
