//! Error types for table loading and expansion.

use thiserror::Error;

/// Errors produced while loading item tables or expanding sentences.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// A condition selected a region that an item row does not have.
    ///
    /// The expander does not validate the condition spec against the
    /// table up front; this is raised at lookup time and aborts the
    /// whole run with no partial output.
    #[error("item {item} has no region '{region}' (condition '{condition}')")]
    MissingRegion {
        /// Zero-based item (row) index.
        item: usize,
        /// The missing region name.
        region: String,
        /// The condition whose region list requested it.
        condition: String,
    },

    /// The item table has no header row.
    #[error("item table has no header row")]
    MissingHeader,

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
