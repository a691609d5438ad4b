//! Field translation table.
//!
//! The translation document maps a field identifier to a label. Older exports
//! write a plain string per field; the converter writes a descriptor object
//! naming the English key, the Chinese key, a display label and, for coded
//! fields, the explanation key:
//!
//! ```text
//! "ROUTE": {
//!   "en": "ROUTE",
//!   "cn": "ROUTE(中文名)",
//!   "display": "给药途径",
//!   "explanation": "ROUTE 解释说明 (Explanation)"
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// Descriptor form of a translation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// One entry of the translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldLabel {
    Plain(String),
    Detailed(FieldDescriptor),
}

impl FieldLabel {
    /// Human-readable label: `display`, then `cn`, then `en`.
    pub fn label(&self) -> Option<&str> {
        let label = match self {
            FieldLabel::Plain(label) => Some(label.as_str()),
            FieldLabel::Detailed(descriptor) => descriptor
                .display
                .as_deref()
                .or(descriptor.cn.as_deref())
                .or(descriptor.en.as_deref()),
        };
        label.filter(|label| !label.is_empty())
    }
}

/// Read-only field-identifier to label table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: BTreeMap<String, FieldLabel>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn insert(&mut self, field_id: impl Into<String>, label: FieldLabel) {
        self.entries.insert(field_id.into(), label);
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldLabel> {
        self.entries.get(field_id)
    }

    /// Label for a field identifier, if the table has a non-empty one.
    pub fn label(&self, field_id: &str) -> Option<&str> {
        self.get(field_id).and_then(FieldLabel::label)
    }

    /// Header for a display column, falling back to the built-in label.
    pub fn column_label(&self, column: Column) -> &str {
        self.label(column.id())
            .unwrap_or_else(|| column.default_label())
    }

    /// The table written alongside converted datasets.
    pub fn default_document() -> Self {
        let mut mapping = Self::new();
        for column in Column::ALL {
            let display = Some(column.default_label().to_string());
            let descriptor = match column.translation_field() {
                Some(cn) => FieldDescriptor {
                    en: Some(column.id().to_string()),
                    cn: Some(cn.key().to_string()),
                    display,
                    explanation: column
                        .explanation_field()
                        .map(|field| field.key().to_string()),
                    field: None,
                },
                None => FieldDescriptor {
                    field: Some(column.id().to_string()),
                    display,
                    ..FieldDescriptor::default()
                },
            };
            mapping.insert(column.id(), FieldLabel::Detailed(descriptor));
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_and_descriptor_entries() {
        let mapping: FieldMapping = serde_json::from_str(
            r#"{
                "UNII": "唯一成分标识符",
                "ROUTE": {"en": "ROUTE", "cn": "ROUTE(中文名)", "display": "给药途径"},
                "POTENCY_UNIT": {"field": "POTENCY_UNIT"}
            }"#,
        )
        .expect("parse mapping");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.label("UNII"), Some("唯一成分标识符"));
        assert_eq!(mapping.label("ROUTE"), Some("给药途径"));
        assert_eq!(mapping.label("POTENCY_UNIT"), None);
        assert_eq!(mapping.column_label(Column::PotencyUnit), "效价单位");
    }

    #[test]
    fn empty_label_falls_back_to_default() {
        let mut mapping = FieldMapping::new();
        mapping.insert("CAS_NUMBER", FieldLabel::Plain(String::new()));
        assert_eq!(mapping.column_label(Column::CasNumber), "CAS号");
    }

    #[test]
    fn default_document_covers_every_column() {
        let mapping = FieldMapping::default_document();
        assert_eq!(mapping.len(), Column::ALL.len());
        assert_eq!(mapping.label("DOSAGE_FORM"), Some("剂型"));
        match mapping.get("DOSAGE_FORM") {
            Some(FieldLabel::Detailed(descriptor)) => assert_eq!(
                descriptor.explanation.as_deref(),
                Some("DOSAGE_FORM 解释说明 (Explanation)")
            ),
            other => panic!("unexpected entry: {other:?}"),
        }
    }
}
