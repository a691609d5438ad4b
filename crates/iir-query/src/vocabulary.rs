//! Distinct-value vocabularies for the categorical filters.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use iir_model::{Column, Field, Record};

/// One option of a categorical filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub code: String,
    /// Translation of the code; empty when the dataset has none.
    pub label: String,
}

impl fmt::Display for VocabularyEntry {
    /// `label (code)`, or the bare code when there is no label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            f.write_str(&self.code)
        } else {
            write!(f, "{} ({})", self.label, self.code)
        }
    }
}

/// Distinct non-empty codes of `field`, sorted ascending, each paired with
/// the translation found in `translation_field`.
///
/// A code seen more than once keeps the translation of its last occurrence,
/// even when that translation is empty.
pub fn build_vocabulary(
    records: &[Record],
    field: Field,
    translation_field: Field,
) -> Vec<VocabularyEntry> {
    let mut codes: BTreeMap<String, String> = BTreeMap::new();
    for record in records {
        if !record.has_text(field) {
            continue;
        }
        codes.insert(record.text(field), record.text(translation_field));
    }
    codes
        .into_iter()
        .map(|(code, label)| VocabularyEntry { code, label })
        .collect()
}

/// Vocabularies for every categorical filter, derived once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabularies {
    pub routes: Vec<VocabularyEntry>,
    pub dosage_forms: Vec<VocabularyEntry>,
}

impl Vocabularies {
    pub fn build(records: &[Record]) -> Self {
        Self {
            routes: vocabulary_for(records, Column::Route),
            dosage_forms: vocabulary_for(records, Column::DosageForm),
        }
    }

    /// Vocabulary backing a column's filter, if it has one.
    pub fn for_column(&self, column: Column) -> Option<&[VocabularyEntry]> {
        match column {
            Column::Route => Some(&self.routes),
            Column::DosageForm => Some(&self.dosage_forms),
            _ => None,
        }
    }
}

fn vocabulary_for(records: &[Record], column: Column) -> Vec<VocabularyEntry> {
    match column.translation_field() {
        Some(translation) => build_vocabulary(records, column.field(), translation),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(code: &str, cn: Option<&str>) -> Record {
        let record = Record::new().with(Field::Route, code);
        match cn {
            Some(cn) => record.with(Field::RouteCn, cn),
            None => record,
        }
    }

    #[test]
    fn last_seen_translation_wins() {
        let records = vec![route("ORAL", Some("口服")), route("ORAL", None)];
        let vocabulary = build_vocabulary(&records, Field::Route, Field::RouteCn);
        assert_eq!(vocabulary.len(), 1);
        assert_eq!(vocabulary[0].code, "ORAL");
        assert_eq!(vocabulary[0].label, "");

        let records = vec![route("ORAL", None), route("ORAL", Some("口服"))];
        let vocabulary = build_vocabulary(&records, Field::Route, Field::RouteCn);
        assert_eq!(vocabulary, vec![VocabularyEntry {
            code: "ORAL".to_string(),
            label: "口服".to_string(),
        }]);
    }

    #[test]
    fn codes_are_sorted_and_blank_codes_skipped() {
        let records = vec![
            route("TOPICAL", Some("局部")),
            route("", Some("空")),
            Record::new(),
            route("BUCCAL", None),
            route("ORAL", Some("口服")),
        ];
        let codes: Vec<String> = build_vocabulary(&records, Field::Route, Field::RouteCn)
            .into_iter()
            .map(|entry| entry.code)
            .collect();
        assert_eq!(codes, vec!["BUCCAL", "ORAL", "TOPICAL"]);
    }

    #[test]
    fn display_omits_empty_label() {
        let bare = VocabularyEntry {
            code: "BUCCAL".to_string(),
            label: String::new(),
        };
        let labelled = VocabularyEntry {
            code: "ORAL".to_string(),
            label: "口服".to_string(),
        };
        assert_eq!(bare.to_string(), "BUCCAL");
        assert_eq!(labelled.to_string(), "口服 (ORAL)");
    }

    #[test]
    fn builds_route_and_dosage_form_vocabularies() {
        let records = vec![
            route("ORAL", Some("口服"))
                .with(Field::DosageForm, "TABLET")
                .with(Field::DosageFormCn, "片剂"),
        ];
        let vocabularies = Vocabularies::build(&records);
        assert_eq!(vocabularies.routes.len(), 1);
        assert_eq!(vocabularies.dosage_forms[0].to_string(), "片剂 (TABLET)");
        assert!(vocabularies.for_column(Column::CasNumber).is_none());
    }
}
