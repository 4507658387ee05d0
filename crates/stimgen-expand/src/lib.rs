//! stimgen Expansion Backend - Wide-to-Long Stimulus Sentence Tables
//!
//! This crate turns wide-format item tables (one row per item, one
//! column per text region) into long-format sentence tables (one row
//! per word), driven by a condition spec from [`stimgen_spec`].
//!
//! # Determinism
//!
//! Expansion is a pure function of the item table, the condition spec,
//! and the expansion options: identical inputs produce byte-identical
//! output files.
//!
//! # Example
//!
//! ```
//! use stimgen_expand::{expand_items, ItemTable, Item};
//! use stimgen_spec::{ExpandOptions, ExperimentSpec};
//!
//! let table = ItemTable::new(
//!     vec!["region_a".into(), "region_b".into()],
//!     vec![Item::from_fields([
//!         ("region_a", "the cat"),
//!         ("region_b", "sat down"),
//!     ])],
//! );
//!
//! let mut spec = ExperimentSpec::new();
//! spec.insert_condition("C1", vec!["region_a".into(), "region_b".into()]);
//!
//! let rows = expand_items(&table, &spec, ExpandOptions::default()).unwrap();
//! assert_eq!(rows.len(), 6); // 4 words + 2 terminator rows
//! assert_eq!(rows[0].word, "the");
//! ```
//!
//! # Module Structure
//!
//! - [`table`]: Wide-format item tables and their CSV reader
//! - [`expand`]: The expansion operation itself
//! - [`io`]: Long-format CSV output
//! - [`error`]: Error types

pub mod error;
pub mod expand;
pub mod io;
pub mod table;

// Re-export main types
pub use error::ExpandError;
pub use expand::{expand_items, SentenceRow, EOS_WORD, TERMINATOR_WORD};
pub use io::{write_sentences, write_sentences_to};
pub use table::{Item, ItemTable};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
