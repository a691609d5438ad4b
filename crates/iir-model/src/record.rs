//! Typed dataset records.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::value::FieldValue;

/// Known keys of a dataset record.
///
/// The variant names follow the columns of the source spreadsheet; the
/// Chinese counterparts and explanation texts are separate keys in the
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    IngredientName,
    IngredientNameCn,
    Route,
    RouteCn,
    RouteExplanation,
    DosageForm,
    DosageFormCn,
    DosageFormExplanation,
    CasNumber,
    Unii,
    PotencyAmount,
    PotencyUnit,
    MaximumDailyExposure,
    MaximumDailyExposureUnit,
    RecordUpdated,
}

impl Field {
    /// All known fields in document order.
    pub const ALL: [Field; 15] = [
        Field::IngredientName,
        Field::IngredientNameCn,
        Field::Route,
        Field::RouteCn,
        Field::RouteExplanation,
        Field::DosageForm,
        Field::DosageFormCn,
        Field::DosageFormExplanation,
        Field::CasNumber,
        Field::Unii,
        Field::PotencyAmount,
        Field::PotencyUnit,
        Field::MaximumDailyExposure,
        Field::MaximumDailyExposureUnit,
        Field::RecordUpdated,
    ];

    /// The key used in the dataset document.
    pub fn key(&self) -> &'static str {
        match self {
            Field::IngredientName => "INGREDIENT_NAME",
            Field::IngredientNameCn => "INGREDIENT_NAME(中文名)",
            Field::Route => "ROUTE",
            Field::RouteCn => "ROUTE(中文名)",
            Field::RouteExplanation => "ROUTE 解释说明 (Explanation)",
            Field::DosageForm => "DOSAGE_FORM",
            Field::DosageFormCn => "DOSAGE_FORM(中文名)",
            Field::DosageFormExplanation => "DOSAGE_FORM 解释说明 (Explanation)",
            Field::CasNumber => "CAS_NUMBER",
            Field::Unii => "UNII",
            Field::PotencyAmount => "POTENCY_AMOUNT",
            Field::PotencyUnit => "POTENCY_UNIT",
            Field::MaximumDailyExposure => "MAXIMUM_DAILY_EXPOSURE",
            Field::MaximumDailyExposureUnit => "MAXIMUM_DAILY_EXPOSURE_UNIT",
            Field::RecordUpdated => "RECORD_UPDATED",
        }
    }

    /// Look up a field by its document key (exact match).
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// One dataset entry.
///
/// Null and missing keys both deserialize to `None`, and so do arrays or
/// objects found under a known key. Keys outside the known set are kept in
/// `extra`; the query engine never reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "INGREDIENT_NAME", default, deserialize_with = "lenient")]
    pub ingredient_name: Option<FieldValue>,
    #[serde(rename = "INGREDIENT_NAME(中文名)", default, deserialize_with = "lenient")]
    pub ingredient_name_cn: Option<FieldValue>,
    #[serde(rename = "ROUTE", default, deserialize_with = "lenient")]
    pub route: Option<FieldValue>,
    #[serde(rename = "ROUTE(中文名)", default, deserialize_with = "lenient")]
    pub route_cn: Option<FieldValue>,
    #[serde(rename = "ROUTE 解释说明 (Explanation)", default, deserialize_with = "lenient")]
    pub route_explanation: Option<FieldValue>,
    #[serde(rename = "DOSAGE_FORM", default, deserialize_with = "lenient")]
    pub dosage_form: Option<FieldValue>,
    #[serde(rename = "DOSAGE_FORM(中文名)", default, deserialize_with = "lenient")]
    pub dosage_form_cn: Option<FieldValue>,
    #[serde(rename = "DOSAGE_FORM 解释说明 (Explanation)", default, deserialize_with = "lenient")]
    pub dosage_form_explanation: Option<FieldValue>,
    #[serde(rename = "CAS_NUMBER", default, deserialize_with = "lenient")]
    pub cas_number: Option<FieldValue>,
    #[serde(rename = "UNII", default, deserialize_with = "lenient")]
    pub unii: Option<FieldValue>,
    #[serde(rename = "POTENCY_AMOUNT", default, deserialize_with = "lenient")]
    pub potency_amount: Option<FieldValue>,
    #[serde(rename = "POTENCY_UNIT", default, deserialize_with = "lenient")]
    pub potency_unit: Option<FieldValue>,
    #[serde(rename = "MAXIMUM_DAILY_EXPOSURE", default, deserialize_with = "lenient")]
    pub maximum_daily_exposure: Option<FieldValue>,
    #[serde(rename = "MAXIMUM_DAILY_EXPOSURE_UNIT", default, deserialize_with = "lenient")]
    pub maximum_daily_exposure_unit: Option<FieldValue>,
    #[serde(rename = "RECORD_UPDATED", default, deserialize_with = "lenient")]
    pub record_updated: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Read any JSON value for a known slot, keeping only scalars.
fn lenient<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(FieldValue::from_json)
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a known field, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Raw value of a known field.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        match field {
            Field::IngredientName => self.ingredient_name.as_ref(),
            Field::IngredientNameCn => self.ingredient_name_cn.as_ref(),
            Field::Route => self.route.as_ref(),
            Field::RouteCn => self.route_cn.as_ref(),
            Field::RouteExplanation => self.route_explanation.as_ref(),
            Field::DosageForm => self.dosage_form.as_ref(),
            Field::DosageFormCn => self.dosage_form_cn.as_ref(),
            Field::DosageFormExplanation => self.dosage_form_explanation.as_ref(),
            Field::CasNumber => self.cas_number.as_ref(),
            Field::Unii => self.unii.as_ref(),
            Field::PotencyAmount => self.potency_amount.as_ref(),
            Field::PotencyUnit => self.potency_unit.as_ref(),
            Field::MaximumDailyExposure => self.maximum_daily_exposure.as_ref(),
            Field::MaximumDailyExposureUnit => self.maximum_daily_exposure_unit.as_ref(),
            Field::RecordUpdated => self.record_updated.as_ref(),
        }
    }

    /// String form of a field; null and missing values become `""`.
    pub fn text(&self, field: Field) -> String {
        self.get(field)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// True when the field holds a value whose string form is non-empty.
    pub fn has_text(&self, field: Field) -> bool {
        self.get(field).is_some_and(|value| !value.is_blank())
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldValue> {
        match field {
            Field::IngredientName => &mut self.ingredient_name,
            Field::IngredientNameCn => &mut self.ingredient_name_cn,
            Field::Route => &mut self.route,
            Field::RouteCn => &mut self.route_cn,
            Field::RouteExplanation => &mut self.route_explanation,
            Field::DosageForm => &mut self.dosage_form,
            Field::DosageFormCn => &mut self.dosage_form_cn,
            Field::DosageFormExplanation => &mut self.dosage_form_explanation,
            Field::CasNumber => &mut self.cas_number,
            Field::Unii => &mut self.unii,
            Field::PotencyAmount => &mut self.potency_amount,
            Field::PotencyUnit => &mut self.potency_unit,
            Field::MaximumDailyExposure => &mut self.maximum_daily_exposure,
            Field::MaximumDailyExposureUnit => &mut self.maximum_daily_exposure_unit,
            Field::RecordUpdated => &mut self.record_updated,
        }
    }
}
