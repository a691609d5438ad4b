//! Display columns of the result table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::Field;

/// A column of a projected row, in table order.
///
/// The first three columns are bilingual; route and dosage form also carry an
/// explanation used as a tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    IngredientName,
    Route,
    DosageForm,
    CasNumber,
    Unii,
    PotencyAmount,
    PotencyUnit,
    MaximumDailyExposure,
    MaximumDailyExposureUnit,
    RecordUpdated,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 10] = [
        Column::IngredientName,
        Column::Route,
        Column::DosageForm,
        Column::CasNumber,
        Column::Unii,
        Column::PotencyAmount,
        Column::PotencyUnit,
        Column::MaximumDailyExposure,
        Column::MaximumDailyExposureUnit,
        Column::RecordUpdated,
    ];

    /// The primary-language field shown in this column.
    pub fn field(&self) -> Field {
        match self {
            Column::IngredientName => Field::IngredientName,
            Column::Route => Field::Route,
            Column::DosageForm => Field::DosageForm,
            Column::CasNumber => Field::CasNumber,
            Column::Unii => Field::Unii,
            Column::PotencyAmount => Field::PotencyAmount,
            Column::PotencyUnit => Field::PotencyUnit,
            Column::MaximumDailyExposure => Field::MaximumDailyExposure,
            Column::MaximumDailyExposureUnit => Field::MaximumDailyExposureUnit,
            Column::RecordUpdated => Field::RecordUpdated,
        }
    }

    /// The Chinese-language counterpart, for bilingual columns.
    pub fn translation_field(&self) -> Option<Field> {
        match self {
            Column::IngredientName => Some(Field::IngredientNameCn),
            Column::Route => Some(Field::RouteCn),
            Column::DosageForm => Some(Field::DosageFormCn),
            _ => None,
        }
    }

    /// The explanation text shown as a tooltip, for coded columns.
    pub fn explanation_field(&self) -> Option<Field> {
        match self {
            Column::Route => Some(Field::RouteExplanation),
            Column::DosageForm => Some(Field::DosageFormExplanation),
            _ => None,
        }
    }

    /// Field identifier used as the key of the translation table.
    pub fn id(&self) -> &'static str {
        self.field().key()
    }

    /// Header used when the translation table has no entry for this column.
    pub fn default_label(&self) -> &'static str {
        match self {
            Column::IngredientName => "成分名称",
            Column::Route => "给药途径",
            Column::DosageForm => "剂型",
            Column::CasNumber => "CAS号",
            Column::Unii => "UNII",
            Column::PotencyAmount => "效价量",
            Column::PotencyUnit => "效价单位",
            Column::MaximumDailyExposure => "最大日暴露量",
            Column::MaximumDailyExposureUnit => "最大日暴露量单位",
            Column::RecordUpdated => "记录更新时间",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Column {
    type Err = ModelError;

    /// Accepts the field identifier (`CAS_NUMBER`) or its lowercase form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownColumn {
                name: s.to_string(),
            })
    }
}
