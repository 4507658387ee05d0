//! Long-format sentence table output.
//!
//! Output files are comma-delimited CSV in UTF-8 with a byte-order
//! mark, matching what downstream analysis notebooks already consume:
//! an unnamed leading column with the running row index, then
//! `sent_index`, `word_index`, `word`, `region`, `condition`.

use std::io::Write;
use std::path::Path;

use crate::error::ExpandError;
use crate::expand::SentenceRow;
use crate::table::UTF8_BOM;

/// Header of the sentence table, leading index column unnamed.
const SENTENCE_HEADER: [&str; 6] = ["", "sent_index", "word_index", "word", "region", "condition"];

/// Writes sentence rows to a CSV file.
pub fn write_sentences(path: impl AsRef<Path>, rows: &[SentenceRow]) -> Result<(), ExpandError> {
    let file = std::fs::File::create(path)?;
    write_sentences_to(file, rows)
}

/// Writes sentence rows to any writer.
pub fn write_sentences_to(mut writer: impl Write, rows: &[SentenceRow]) -> Result<(), ExpandError> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SENTENCE_HEADER)?;
    for (index, row) in rows.iter().enumerate() {
        csv_writer.write_record([
            index.to_string().as_str(),
            row.sent_index.to_string().as_str(),
            row.word_index.to_string().as_str(),
            row.word.as_str(),
            row.region.as_str(),
            row.condition.as_str(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}
