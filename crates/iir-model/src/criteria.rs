//! User-supplied filter terms for one search.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Names accepted by [`FilterCriteria::set`].
pub const CRITERION_NAMES: [&str; 5] = ["ingredient", "route", "dosage_form", "cas", "unii"];

/// Filter terms for one search invocation.
///
/// Every term is optional; an absent or empty term matches every record.
/// The struct holds the terms exactly as the user typed them; trimming and
/// case folding happen in the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring of the English or Chinese ingredient name.
    pub ingredient: Option<String>,
    /// Exact route code.
    pub route: Option<String>,
    /// Exact dosage-form code.
    pub dosage_form: Option<String>,
    /// Substring of the CAS registry number.
    pub cas_number: Option<String>,
    /// Substring of the UNII code.
    pub unii: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ingredient(mut self, term: impl Into<String>) -> Self {
        self.ingredient = Some(term.into());
        self
    }

    #[must_use]
    pub fn with_route(mut self, code: impl Into<String>) -> Self {
        self.route = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_dosage_form(mut self, code: impl Into<String>) -> Self {
        self.dosage_form = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_cas_number(mut self, term: impl Into<String>) -> Self {
        self.cas_number = Some(term.into());
        self
    }

    #[must_use]
    pub fn with_unii(mut self, term: impl Into<String>) -> Self {
        self.unii = Some(term.into());
        self
    }

    /// Set a criterion by name (`ingredient`, `route`, `dosage_form`, `cas`,
    /// `unii`). An empty value clears it.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let value = (!value.is_empty()).then(|| value.to_string());
        let slot = match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "ingredient" | "ingredient_name" => &mut self.ingredient,
            "route" => &mut self.route,
            "dosage_form" => &mut self.dosage_form,
            "cas" | "cas_number" => &mut self.cas_number,
            "unii" => &mut self.unii,
            _ => {
                return Err(ModelError::UnknownCriterion {
                    name: name.to_string(),
                    expected: CRITERION_NAMES.join(", "),
                });
            }
        };
        *slot = value;
        Ok(())
    }

    /// Number of terms that will actually constrain a search.
    pub fn active_count(&self) -> usize {
        [
            self.ingredient.as_deref().map(str::trim),
            self.route.as_deref(),
            self.dosage_form.as_deref(),
            self.cas_number.as_deref().map(str::trim),
            self.unii.as_deref().map(str::trim),
        ]
        .into_iter()
        .filter(|term| term.is_some_and(|term| !term.is_empty()))
        .count()
    }

    /// True when no term constrains the search.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
