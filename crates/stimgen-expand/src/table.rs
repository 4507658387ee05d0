//! Wide-format item tables.
//!
//! An item table is the experiment's source material: one row per
//! item, one column per named text region. Tables arrive as
//! semicolon-delimited CSV in UTF-8, optionally with a byte-order
//! mark (spreadsheet exports commonly carry one).

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::ExpandError;

/// UTF-8 byte-order mark.
pub(crate) const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Field delimiter of item-table CSV files.
pub(crate) const ITEM_DELIMITER: u8 = b';';

/// One item: a mapping from region name to its space-delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    fields: HashMap<String, String>,
}

impl Item {
    /// Creates an item from (region, text) pairs.
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the text of a region, if the item has it.
    pub fn region(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An ordered sequence of items with a shared column set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemTable {
    columns: Vec<String>,
    rows: Vec<Item>,
}

impl ItemTable {
    /// Creates a table from explicit columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Item>) -> Self {
        Self { columns, rows }
    }

    /// Reads a semicolon-delimited item table from a CSV file.
    ///
    /// A leading UTF-8 byte-order mark is stripped before parsing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExpandError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Reads a semicolon-delimited item table from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExpandError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Self::from_reader(bytes)
    }

    /// Reads a semicolon-delimited item table from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ExpandError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(ITEM_DELIMITER)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if headers.is_empty() {
            return Err(ExpandError::MissingHeader);
        }
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let fields = columns
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string));
            rows.push(Item::from_fields(fields));
        }

        Ok(Self { columns, rows })
    }

    /// Returns the column (region) names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in table order.
    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no items.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
