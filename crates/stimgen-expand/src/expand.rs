//! Wide-to-long sentence expansion.
//!
//! The core operation of the crate: every (item, condition) pair
//! becomes one sentence, emitted word by word with positional and
//! region metadata.

use stimgen_spec::{ExpandOptions, ExperimentSpec, END_REGION};

use crate::error::ExpandError;
use crate::table::ItemTable;

/// Word of the first synthetic terminator row.
pub const TERMINATOR_WORD: &str = ".";

/// Word of the second synthetic terminator row.
pub const EOS_WORD: &str = "<eos>";

/// One word of one expanded sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRow {
    /// Zero-based item index of the sentence.
    pub sent_index: usize,
    /// Zero-based position of the word within the sentence.
    pub word_index: usize,
    /// The word itself.
    pub word: String,
    /// Name of the region the word came from (`"end"` for terminators).
    pub region: String,
    /// Name of the condition the sentence realizes.
    pub condition: String,
}

/// Expands an item table into long-format sentence rows.
///
/// Row order is condition-major (spec order), then item-major (table
/// order), then region order within the condition, then word order
/// within the region text. Region text is split on whitespace; empty
/// text contributes no words.
///
/// With `options.autocaps`, the first word of each sentence is
/// title-cased. Unless `options.end_condition_included`, two
/// terminator rows follow each sentence at word indices `counter + 1`
/// and `counter + 2`, leaving index `counter` unused. Downstream
/// tooling depends on that exact indexing, so it is kept as is.
///
/// A region missing from a row aborts the expansion with
/// [`ExpandError::MissingRegion`]; nothing is validated up front.
pub fn expand_items(
    items: &ItemTable,
    conditions: &ExperimentSpec,
    options: ExpandOptions,
) -> Result<Vec<SentenceRow>, ExpandError> {
    let mut output = Vec::new();

    for (condition, regions) in conditions.conditions() {
        for (sent_index, item) in items.rows().iter().enumerate() {
            let mut word_index = 0;
            for region in regions {
                let text =
                    item.region(region)
                        .ok_or_else(|| ExpandError::MissingRegion {
                            item: sent_index,
                            region: region.clone(),
                            condition: condition.to_string(),
                        })?;
                for word in text.split_whitespace() {
                    let word = if options.autocaps && word_index == 0 {
                        title_case(word)
                    } else {
                        word.to_string()
                    };
                    output.push(SentenceRow {
                        sent_index,
                        word_index,
                        word,
                        region: region.clone(),
                        condition: condition.to_string(),
                    });
                    word_index += 1;
                }
            }
            if !options.end_condition_included {
                output.push(SentenceRow {
                    sent_index,
                    word_index: word_index + 1,
                    word: TERMINATOR_WORD.to_string(),
                    region: END_REGION.to_string(),
                    condition: condition.to_string(),
                });
                output.push(SentenceRow {
                    sent_index,
                    word_index: word_index + 2,
                    word: EOS_WORD.to_string(),
                    region: END_REGION.to_string(),
                    condition: condition.to_string(),
                });
            }
        }
    }

    Ok(output)
}

/// Title-cases a single word: first character uppercased, the rest
/// lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Item;
    use pretty_assertions::assert_eq;

    fn single_item_table() -> ItemTable {
        ItemTable::new(
            vec!["region_a".into(), "region_b".into()],
            vec![Item::from_fields([
                ("region_a", "the cat"),
                ("region_b", "sat down"),
            ])],
        )
    }

    fn one_condition() -> ExperimentSpec {
        let mut spec = ExperimentSpec::new();
        spec.insert_condition("C1", vec!["region_a".into(), "region_b".into()]);
        spec
    }

    fn row(
        sent_index: usize,
        word_index: usize,
        word: &str,
        region: &str,
        condition: &str,
    ) -> SentenceRow {
        SentenceRow {
            sent_index,
            word_index,
            word: word.into(),
            region: region.into(),
            condition: condition.into(),
        }
    }

    #[test]
    fn test_concrete_scenario_with_terminators() {
        let rows = expand_items(
            &single_item_table(),
            &one_condition(),
            ExpandOptions::default(),
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![
                row(0, 0, "the", "region_a", "C1"),
                row(0, 1, "cat", "region_a", "C1"),
                row(0, 2, "sat", "region_b", "C1"),
                row(0, 3, "down", "region_b", "C1"),
                row(0, 5, ".", "end", "C1"),
                row(0, 6, "<eos>", "end", "C1"),
            ]
        );
    }

    #[test]
    fn test_autocaps_title_cases_only_first_word() {
        let options = ExpandOptions {
            autocaps: true,
            ..ExpandOptions::default()
        };
        let rows = expand_items(&single_item_table(), &one_condition(), options).unwrap();

        assert_eq!(rows[0].word, "The");
        assert_eq!(rows[1].word, "cat");
        assert_eq!(rows[2].word, "sat");
    }

    #[test]
    fn test_end_condition_included_suppresses_terminators() {
        let options = ExpandOptions {
            end_condition_included: true,
            ..ExpandOptions::default()
        };
        let rows = expand_items(&single_item_table(), &one_condition(), options).unwrap();

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.region != END_REGION));
    }

    #[test]
    fn test_row_count_is_word_count_plus_two() {
        let table = ItemTable::new(
            vec!["a".into(), "b".into()],
            vec![
                Item::from_fields([("a", "one two three"), ("b", "four")]),
                Item::from_fields([("a", "five"), ("b", "six seven")]),
            ],
        );
        let mut spec = ExperimentSpec::new();
        spec.insert_condition("C1", vec!["a".into(), "b".into()]);

        let rows = expand_items(&table, &spec, ExpandOptions::default()).unwrap();
        // (4 + 2) + (3 + 2)
        assert_eq!(rows.len(), 11);
    }

    #[test]
    fn test_empty_region_text_yields_no_words() {
        let table = ItemTable::new(
            vec!["a".into(), "b".into()],
            vec![Item::from_fields([("a", ""), ("b", "word")])],
        );
        let mut spec = ExperimentSpec::new();
        spec.insert_condition("C1", vec!["a".into(), "b".into()]);

        let rows = expand_items(&table, &spec, ExpandOptions::default()).unwrap();
        assert_eq!(rows[0], row(0, 0, "word", "b", "C1"));
        assert_eq!(rows[1].word_index, 2);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_word_indices_strictly_increase_with_terminator_gap() {
        let rows = expand_items(
            &single_item_table(),
            &one_condition(),
            ExpandOptions::default(),
        )
        .unwrap();

        let indices: Vec<usize> = rows.iter().map(|r| r.word_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 5, 6]);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_condition_major_then_item_major_order() {
        let table = ItemTable::new(
            vec!["a".into()],
            vec![
                Item::from_fields([("a", "x")]),
                Item::from_fields([("a", "y")]),
            ],
        );
        let mut spec = ExperimentSpec::new();
        spec.insert_condition("C2", vec!["a".into()]);
        spec.insert_condition("C1", vec!["a".into()]);

        let rows = expand_items(&table, &spec, ExpandOptions::default()).unwrap();
        let order: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.condition.as_str(), r.sent_index))
            .collect();
        // Spec insertion order first (C2 before C1), items in table order
        // within each condition.
        assert_eq!(
            order,
            vec![
                ("C2", 0),
                ("C2", 0),
                ("C2", 0),
                ("C2", 1),
                ("C2", 1),
                ("C2", 1),
                ("C1", 0),
                ("C1", 0),
                ("C1", 0),
                ("C1", 1),
                ("C1", 1),
                ("C1", 1),
            ]
        );
    }

    #[test]
    fn test_missing_region_aborts_expansion() {
        let mut spec = ExperimentSpec::new();
        spec.insert_condition("C1", vec!["region_a".into(), "missing".into()]);

        let err = expand_items(&single_item_table(), &spec, ExpandOptions::default())
            .unwrap_err();
        match err {
            ExpandError::MissingRegion {
                item,
                region,
                condition,
            } => {
                assert_eq!(item, 0);
                assert_eq!(region, "missing");
                assert_eq!(condition, "C1");
            }
            other => panic!("expected MissingRegion, got {:?}", other),
        }
    }

    #[test]
    fn test_expansion_is_deterministic() {
        let a = expand_items(
            &single_item_table(),
            &one_condition(),
            ExpandOptions::default(),
        )
        .unwrap();
        let b = expand_items(
            &single_item_table(),
            &one_condition(),
            ExpandOptions::default(),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("the"), "The");
        assert_eq!(title_case("THE"), "The");
        assert_eq!(title_case("über"), "Über");
        assert_eq!(title_case(""), "");
    }
}
